use axum::{http::header, response::IntoResponse, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Icon {
    pub src: &'static str,
    pub sizes: &'static str,
    #[serde(rename = "type")]
    pub mime: &'static str,
}

#[derive(Debug, Serialize)]
pub struct WebManifest {
    pub name: &'static str,
    pub short_name: &'static str,
    pub description: &'static str,
    pub start_url: &'static str,
    pub display: &'static str,
    pub background_color: &'static str,
    pub theme_color: &'static str,
    pub icons: Vec<Icon>,
}

pub fn web_manifest() -> WebManifest {
    WebManifest {
        name: "Madhusudhan J S",
        short_name: "Madhu",
        description: "Official portfolio of Madhusudhan J S",
        start_url: "/",
        display: "standalone",
        background_color: "#000000",
        theme_color: "#000000",
        icons: vec![Icon {
            src: "/favicon.ico",
            sizes: "any",
            mime: "image/x-icon",
        }],
    }
}

/// GET /manifest.webmanifest
pub async fn handle_manifest() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/manifest+json")],
        Json(web_manifest()),
    )
}
