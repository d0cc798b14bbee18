// Resume tailoring: job-description-specific summaries and their export.
// Model calls go through llm_client.

pub mod handlers;
pub mod tailor;
