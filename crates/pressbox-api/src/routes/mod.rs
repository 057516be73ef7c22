pub mod blogs;
pub mod health;
pub mod logos;

use axum::http::header;
use axum::response::{IntoResponse, Response};

/// Attach the Cache-Control value a route declares to the edge cache
pub(crate) fn with_cache_control(value: &'static str, body: impl IntoResponse) -> Response {
    ([(header::CACHE_CONTROL, value)], body).into_response()
}
