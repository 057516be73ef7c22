use axum::extract::State;
use axum::response::Response;
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Serialize;
use tracing::info;

use super::with_cache_control;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct LogoResponse {
    pub key: String,
    pub logo: String,
}

/// GET /api/logos
///
/// Disk-cached read-through of the logo bucket. Edge caching is disabled
/// for this route so the per-instance disk cache is what gets exercised.
pub async fn list_logos(State(state): State<AppState>) -> Result<Response, AppError> {
    let logos = state.logos.list_logos().await?;
    info!(count = logos.len(), "Listed logos");

    let body: Vec<LogoResponse> = logos
        .into_iter()
        .map(|l| LogoResponse {
            key: l.key,
            logo: BASE64.encode(l.content),
        })
        .collect();

    Ok(with_cache_control("no-store", Json(body)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list_cache::BlogListCache;
    use crate::logos::{LogoService, ObjectSource};
    use crate::router;
    use crate::store::BlogStore;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::Utc;
    use file_logo_cache::LogoCache;
    use object_store_client::ObjectStoreError;
    use pressbox_db::BlogRow;
    use std::sync::Arc;
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

    struct TwoLogos;

    #[async_trait]
    impl ObjectSource for TwoLogos {
        async fn list(&self) -> Result<Vec<String>, ObjectStoreError> {
            Ok(vec!["acme.png".to_string(), "globex.png".to_string()])
        }

        async fn fetch(&self, name: &str) -> Result<Vec<u8>, ObjectStoreError> {
            Ok(name.as_bytes().to_vec())
        }
    }

    struct BrokenSource;

    #[async_trait]
    impl ObjectSource for BrokenSource {
        async fn list(&self) -> Result<Vec<String>, ObjectStoreError> {
            Err(ObjectStoreError::Api("bucket unreachable".to_string()))
        }

        async fn fetch(&self, _name: &str) -> Result<Vec<u8>, ObjectStoreError> {
            Err(ObjectStoreError::Api("bucket unreachable".to_string()))
        }
    }

    fn state_with_source(source: Arc<dyn ObjectSource>) -> AppState {
        let dir = tempdir().unwrap();
        let cache = LogoCache::new(dir.keep());
        AppState {
            store: Arc::new(NoStore),
            list_cache: Arc::new(BlogListCache::new()),
            logos: Arc::new(LogoService::new(source, cache)),
            started_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_logos_are_served_base64_encoded() {
        let state = state_with_source(Arc::new(TwoLogos));
        state.logos.list_logos().await.ok();
        let app = router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/logos")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let logos = json.as_array().unwrap();
        assert_eq!(logos.len(), 2);
        assert_eq!(logos[0]["key"], "acme.png");
        assert_eq!(logos[0]["logo"], BASE64.encode(b"acme.png"));
    }

    #[tokio::test]
    async fn test_unreachable_bucket_yields_generic_500() {
        let app = router(state_with_source(Arc::new(BrokenSource)));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/logos")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "An error has occurred");
    }
}
