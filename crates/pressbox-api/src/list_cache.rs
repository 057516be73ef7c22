use chrono::{DateTime, Utc};
use pressbox_db::BlogRow;
use tokio::sync::RwLock;

/// A full blog listing captured at one point in time
#[derive(Debug, Clone)]
pub struct CachedBlogList {
    pub items: Vec<BlogRow>,
    pub generated_at: DateTime<Utc>,
}

/// Process-wide memory cache of the full blog list.
///
/// Populated lazily on the first cached-list request and served unchanged
/// until the process instance is recycled: no eviction, no refresh, no TTL.
/// Two requests racing before first populate may both fetch from the store
/// and either write may win; the fetch is idempotent and both results are
/// equivalent, so the race is tolerated rather than guarded with a
/// single-flight primitive.
#[derive(Default)]
pub struct BlogListCache {
    inner: RwLock<Option<CachedBlogList>>,
}

impl BlogListCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached list, if a non-empty one has been stored
    pub async fn get(&self) -> Option<CachedBlogList> {
        let guard = self.inner.read().await;
        guard.as_ref().filter(|c| !c.items.is_empty()).cloned()
    }

    /// Store a freshly fetched list stamped with the current time
    pub async fn put(&self, items: Vec<BlogRow>) -> CachedBlogList {
        let cached = CachedBlogList {
            items,
            generated_at: Utc::now(),
        };
        *self.inner.write().await = Some(cached.clone());
        cached
    }
}
