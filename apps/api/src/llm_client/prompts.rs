// Cross-cutting prompt helpers.
// Each feature that calls a model keeps its own prompts.rs alongside it.

use serde::Serialize;

/// Two-space indented JSON for embedding data in a prompt.
/// Falls back to `[]` if the value cannot be serialized.
pub fn pretty_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "[]".to_string())
}

/// Replaces each `{key}` placeholder in `template` with its value.
/// Substituted text is never rescanned, so user data containing `{key}` stays intact.
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let hit = vars.iter().find(|(key, _)| {
            tail.len() > key.len() + 1
                && tail[1..].starts_with(key)
                && tail[key.len() + 1..].starts_with('}')
        });
        match hit {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 2..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
