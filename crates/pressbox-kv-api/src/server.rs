//! HTTP server for the KV blog endpoints
//!
//! Provides /health, /api/blogs, /api/blogs/{id}, /api/blogs/{id}/direct,
//! and the PUT /api/blogs/{id} mutation. The plain read routes go through
//! the accelerator (eventually consistent); the /direct route reads the
//! store itself with strong consistency. Which path a caller gets is
//! encoded in the URL, never in a hidden toggle.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use chrono::{DateTime, Utc};
use kv_store_client::KvBlog;
use serde::Serialize;
use tracing::{error, info, warn};
use tower_http::cors::{Any, CorsLayer};

use crate::store::KvBlogStore;
use crate::types::{BlogListResponse, BlogResponse, HealthResponse, UpdateBlogRequest};

/// Shared state for the HTTP server
pub struct ServerState {
    /// Reads routed through the accelerator, eventually consistent
    pub cached: Arc<dyn KvBlogStore>,
    /// Reads and writes against the store itself, strongly consistent
    pub direct: Arc<dyn KvBlogStore>,
    pub started_at: DateTime<Utc>,
}

impl ServerState {
    pub fn new(cached: Arc<dyn KvBlogStore>, direct: Arc<dyn KvBlogStore>) -> Self {
        Self {
            cached,
            direct,
            started_at: Utc::now(),
        }
    }
}

pub type SharedState = Arc<ServerState>;

/// Error response
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Create the HTTP router
pub fn create_router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::PUT])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/blogs", get(list_blogs))
        .route("/api/blogs/{id}", get(get_blog).put(update_blog))
        .route("/api/blogs/{id}/direct", get(get_blog_direct))
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(state: SharedState, port: u16) -> std::io::Result<()> {
    let router = create_router(state);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await
}

/// Health check endpoint
async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    let uptime_secs = (Utc::now() - state.started_at).num_seconds().max(0) as u64;

    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_secs,
    })
}

/// List all blogs through the accelerator
async fn list_blogs(State(state): State<SharedState>) -> Response {
    match state.cached.list().await {
        Ok(items) => {
            info!(count = items.len(), "Listed blogs through accelerator");
            Json(BlogListResponse {
                items,
                response_date_time: Utc::now(),
            })
            .into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list blogs");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "An error has occurred")
        }
    }
}

/// Get a blog by id through the accelerator
async fn get_blog(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    blog_response(state.cached.as_ref(), &id).await
}

/// Get a blog by id directly from the store, strongly consistent
async fn get_blog_direct(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    blog_response(state.direct.as_ref(), &id).await
}

/// Shared get-by-id contract for both read paths
async fn blog_response(store: &dyn KvBlogStore, id: &str) -> Response {
    if id.trim().is_empty() {
        warn!("Rejected blog request with blank id");
        return error_response(StatusCode::BAD_REQUEST, "Invalid request");
    }

    match store.get(id).await {
        Ok(Some(blog)) => {
            info!(id, "Fetched blog");
            (StatusCode::OK, Json(BlogResponse::stamped(blog))).into_response()
        }
        Ok(None) => {
            info!(id, "Blog not found");
            error_response(StatusCode::NOT_FOUND, "Blog not found")
        }
        Err(e) => {
            error!(id, error = %e, "Failed to fetch blog");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "An error has occurred")
        }
    }
}

/// Update a blog, writing straight to the store.
///
/// Eviction of the edge cache entries this write invalidates is declared in
/// the edge configuration; the handler only performs the write.
async fn update_blog(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateBlogRequest>,
) -> Response {
    if id.trim().is_empty() {
        warn!("Rejected blog update with blank id");
        return error_response(StatusCode::BAD_REQUEST, "Invalid request");
    }

    let blog = KvBlog {
        id: id.clone(),
        title: request.title,
        body: request.body,
        date: request.date,
    };

    match state.direct.put(&blog).await {
        Ok(()) => {
            info!(id, "Updated blog");
            (StatusCode::OK, Json(BlogResponse::stamped(blog))).into_response()
        }
        Err(e) => {
            error!(id, error = %e, "Failed to update blog");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "An error has occurred")
        }
    }
}
