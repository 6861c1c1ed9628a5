//! Cached data endpoint stub.
//!
//! Only sets a CDN cache directive; there is no data behind it yet.

use axum::Json;
use axum::http::header;
use axum::response::IntoResponse;

pub const CACHE_DIRECTIVE: &str = "s-maxage=86400, stale-while-revalidate";

/// `GET /api/some-data`
pub async fn some_data() -> impl IntoResponse {
    ([(header::CACHE_CONTROL, CACHE_DIRECTIVE)], Json(serde_json::json!({})))
}

#[cfg(test)]
#[path = "data_test.rs"]
mod tests;
