use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use chrono::{DateTime, NaiveDate, Utc};
use pressbox_db::BlogRow;
use serde::Serialize;
use tracing::{info, warn};

use super::with_cache_control;
use crate::error::AppError;
use crate::state::AppState;
use crate::store::BlogStore;

/// Edge cache TTLs declared per route. The edge keys list responses on the
/// path and get responses on the id segment.
const LIST_CACHE_CONTROL: &str = "public, max-age=600";
const GET_CACHE_CONTROL: &str = "public, max-age=60";
/// Routes that cache in-process must not also be cached at the edge.
const NO_EDGE_CACHE: &str = "no-store";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: NaiveDate,
    /// Stamped at response time so a human operator can see which cache
    /// layer served the request.
    pub response_date_time: DateTime<Utc>,
}

impl BlogResponse {
    fn stamped(row: BlogRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            body: row.body,
            date: row.date,
            response_date_time: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogListResponse {
    pub items: Vec<BlogRow>,
    pub response_date_time: DateTime<Utc>,
}

/// GET /api/blogs/{id}
///
/// Direct store read; the edge cache absorbs repeat reads per id.
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let blog = fetch_blog(state.store.as_ref(), &id).await?;
    info!(id = %blog.id, "Fetched blog");
    Ok(with_cache_control(
        GET_CACHE_CONTROL,
        Json(BlogResponse::stamped(blog)),
    ))
}

/// Shared get-by-id contract: validate the id before touching the store,
/// then enforce the unique-id assumption on what comes back.
pub(crate) async fn fetch_blog(store: &dyn BlogStore, id: &str) -> Result<BlogRow, AppError> {
    if id.trim().is_empty() {
        return Err(AppError::BadRequest("blog id is required".to_string()));
    }

    let rows = store.get(id).await?;

    if rows.len() > 1 {
        // Ids are unique by contract; duplicates mean the table is damaged.
        warn!(id, matches = rows.len(), "Multiple rows share a blog id, serving the first");
    }

    rows.into_iter()
        .next()
        .ok_or_else(|| AppError::NotFound(format!("no blog with id {id}")))
}

/// GET /api/blogs
pub async fn list_blogs(State(state): State<AppState>) -> Result<Response, AppError> {
    let items = state.store.list().await?;
    info!(count = items.len(), "Listed blogs from store");

    let body = BlogListResponse {
        items,
        response_date_time: Utc::now(),
    };
    Ok(with_cache_control(LIST_CACHE_CONTROL, Json(body)))
}

/// GET /api/blogs/cached
///
/// Serves the process-wide memory cache, populating it from the store on
/// the first request of this instance. The timestamp in the response is the
/// cache's population time, so repeat calls make the caching visible.
pub async fn list_blogs_cached(State(state): State<AppState>) -> Result<Response, AppError> {
    if let Some(cached) = state.list_cache.get().await {
        info!(count = cached.items.len(), "Serving blog list from memory cache");
        let body = BlogListResponse {
            items: cached.items,
            response_date_time: cached.generated_at,
        };
        return Ok(with_cache_control(NO_EDGE_CACHE, Json(body)));
    }

    info!("No blog list cached in memory, fetching from store");
    let items = state.store.list().await?;
    let cached = state.list_cache.put(items).await;

    let body = BlogListResponse {
        items: cached.items,
        response_date_time: cached.generated_at,
    };
    Ok(with_cache_control(NO_EDGE_CACHE, Json(body)))
}
