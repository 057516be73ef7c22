//! Pressbox API - blog reads over the relational store
//!
//! Exposes the direct read endpoints (fronted by the edge cache), the
//! memory-cached listing, and the disk-cached logo listing.

mod config;
mod error;
mod list_cache;
mod logos;
mod routes;
mod state;
mod store;

use std::sync::Arc;

use axum::http::{header, Method};
use axum::routing::get;
use axum::Router;
use chrono::Utc;
use file_logo_cache::LogoCache;
use object_store_client::ObjectStoreClient;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

use config::Config;
use list_cache::BlogListCache;
use logos::LogoService;
use state::AppState;
use store::PgBlogStore;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = Config::from_env();
    info!(port = config.port, "Starting pressbox-api");

    let pool = PgPoolOptions::new()
        .max_connections(20)
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    let logo_cache = LogoCache::new(&config.logo_cache_dir);
    logo_cache
        .init()
        .await
        .expect("Failed to create logo cache directory");
    info!(dir = %config.logo_cache_dir, "Logo cache directory ready");

    let object_store = ObjectStoreClient::new(&config.object_store_url, &config.logo_bucket);

    let state = AppState {
        store: Arc::new(PgBlogStore::new(pool)),
        list_cache: Arc::new(BlogListCache::new()),
        logos: Arc::new(LogoService::new(Arc::new(object_store), logo_cache)),
        started_at: Utc::now(),
    };

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("Failed to bind");

    info!(port = config.port, "Listening");

    axum::serve(listener, app).await.expect("Server failed");
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "pressbox_api=info".into());

    // Use JSON format for cloud logging when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer())
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}

/// Create the HTTP router
fn router(state: AppState) -> Router {
    // Read-only API, so CORS allows GET from anywhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(routes::health::health))
        // static segment before the id capture
        .route("/api/blogs/cached", get(routes::blogs::list_blogs_cached))
        .route("/api/blogs/{id}", get(routes::blogs::get_blog))
        .route("/api/blogs", get(routes::blogs::list_blogs))
        .route("/api/logos", get(routes::logos::list_logos))
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logos::ObjectSource;
    use crate::store::BlogStore;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use object_store_client::ObjectStoreError;
    use pressbox_db::BlogRow;
    use tempfile::tempdir;
    use tower::ServiceExt;

    struct NoStore;

    #[async_trait]
    impl BlogStore for NoStore {
        async fn get(&self, _id: &str) -> Result<Vec<BlogRow>, sqlx::Error> {
            Ok(Vec::new())
        }

        async fn list(&self) -> Result<Vec<BlogRow>, sqlx::Error> {
            Ok(Vec::new())
        }
    }

    struct EmptySource;

    #[async_trait]
    impl ObjectSource for EmptySource {
        async fn list(&self) -> Result<Vec<String>, ObjectStoreError> {
            Ok(Vec::new())
        }

        async fn fetch(&self, _name: &str) -> Result<Vec<u8>, ObjectStoreError> {
            Err(ObjectStoreError::Api("no objects".to_string()))
        }
    }

    fn empty_state() -> AppState {
        let dir = tempdir().unwrap();
        let cache = LogoCache::new(dir.keep());
        AppState {
            store: Arc::new(NoStore),
            list_cache: Arc::new(BlogListCache::new()),
            logos: Arc::new(LogoService::new(Arc::new(EmptySource), cache)),
            started_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = router(empty_state());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["status"], "ok");
        assert!(json["uptime_secs"].as_u64().is_some());
        assert_eq!(json["logo_cache_populated"], false);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let app = router(empty_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/unknown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
