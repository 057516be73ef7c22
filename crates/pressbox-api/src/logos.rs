//! Read-through orchestration of the on-disk logo cache

use std::sync::Arc;

use async_trait::async_trait;
use file_logo_cache::{CachedLogo, LogoCache};
use object_store_client::{ObjectStoreClient, ObjectStoreError};
use tracing::{debug, info};

use crate::error::AppError;

/// Upstream object storage the logo cache is populated from
#[async_trait]
pub trait ObjectSource: Send + Sync {
    async fn list(&self) -> Result<Vec<String>, ObjectStoreError>;
    async fn fetch(&self, name: &str) -> Result<Vec<u8>, ObjectStoreError>;
}

#[async_trait]
impl ObjectSource for ObjectStoreClient {
    async fn list(&self) -> Result<Vec<String>, ObjectStoreError> {
        Ok(self
            .list_objects()
            .await?
            .into_iter()
            .map(|o| o.name)
            .collect())
    }

    async fn fetch(&self, name: &str) -> Result<Vec<u8>, ObjectStoreError> {
        self.fetch_object(name).await
    }
}

/// Serves the logo set from disk once populated, pulling the full set from
/// the bucket on the first request of a process instance.
pub struct LogoService {
    source: Arc<dyn ObjectSource>,
    cache: LogoCache,
}

impl LogoService {
    pub fn new(source: Arc<dyn ObjectSource>, cache: LogoCache) -> Self {
        Self { source, cache }
    }

    /// Whether the disk cache has been populated in this process instance
    pub fn cache_populated(&self) -> bool {
        self.cache.is_populated()
    }

    /// Serve all logos, populating the disk cache on first use.
    ///
    /// If listing, any fetch, or any disk write fails, the error surfaces
    /// to the caller and the cache stays unpopulated, so the next request
    /// retries the full object-store path instead of serving a partial set.
    pub async fn list_logos(&self) -> Result<Vec<CachedLogo>, AppError> {
        if self.cache.is_populated() {
            debug!("Logo cache populated, reading from disk");
            return self
                .cache
                .read_all()
                .await
                .map_err(|e| AppError::Internal(format!("failed to read logo cache: {e}")));
        }

        info!("Logo cache not populated, fetching from object store");
        let names = self.source.list().await.map_err(AppError::upstream)?;

        // Objects are fetched one at a time; the working set is a handful
        // of company logos, so fan-out is not worth the complexity.
        let mut logos = Vec::with_capacity(names.len());
        for name in names {
            let content = self.source.fetch(&name).await.map_err(AppError::upstream)?;
            logos.push(CachedLogo { key: name, content });
        }

        self.cache
            .store_all(&logos)
            .await
            .map_err(|e| AppError::Internal(format!("failed to write logo cache: {e}")))?;

        info!(count = logos.len(), "Cached logos for this instance");
        Ok(logos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::tempdir;

    struct FakeSource {
        objects: HashMap<String, Vec<u8>>,
        fail_on: Option<String>,
        list_calls: AtomicUsize,
        fetch_calls: AtomicUsize,
    }

    impl FakeSource {
        fn new(objects: &[(&str, &[u8])]) -> Self {
            Self {
                objects: objects
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_vec()))
                    .collect(),
                fail_on: None,
                list_calls: AtomicUsize::new(0),
                fetch_calls: AtomicUsize::new(0),
            }
        }

        fn failing_on(mut self, name: &str) -> Self {
            self.fail_on = Some(name.to_string());
            self
        }
    }

    #[async_trait]
    impl ObjectSource for FakeSource {
        async fn list(&self) -> Result<Vec<String>, ObjectStoreError> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            let mut names: Vec<_> = self.objects.keys().cloned().collect();
            names.sort();
            Ok(names)
        }

        async fn fetch(&self, name: &str) -> Result<Vec<u8>, ObjectStoreError> {
            self.fetch_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_on.as_deref() == Some(name) {
                return Err(ObjectStoreError::Api(format!("{name} unavailable")));
            }
            Ok(self.objects[name].clone())
        }
    }

    #[tokio::test]
    async fn test_first_call_fetches_and_caches_all_objects() {
        let dir = tempdir().unwrap();
        let cache = LogoCache::new(dir.path());
        cache.init().await.unwrap();

        let source = Arc::new(FakeSource::new(&[
            ("acme.png", b"acme"),
            ("globex.png", b"globex"),
        ]));
        let service = LogoService::new(source.clone(), cache);

        let logos = service.list_logos().await.unwrap();
        assert_eq!(logos.len(), 2);
        assert!(service.cache_populated());
        assert_eq!(source.list_calls.load(Ordering::SeqCst), 1);
        assert_eq!(source.fetch_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_second_call_reads_from_disk_without_fetching() {
        let dir = tempdir().unwrap();
        let cache = LogoCache::new(dir.path());
        cache.init().await.unwrap();

        let source = Arc::new(FakeSource::new(&[
            ("acme.png", b"acme"),
            ("globex.png", b"globex"),
        ]));
        let service = LogoService::new(source.clone(), cache);

        let first = service.list_logos().await.unwrap();
        let second = service.list_logos().await.unwrap();

        let mut first_sorted = first.clone();
        first_sorted.sort_by(|a, b| a.key.cmp(&b.key));
        assert_eq!(second, first_sorted);
        // still exactly one listing and one fetch per object
        assert_eq!(source.list_calls.load(Ordering::SeqCst), 1);
        assert_eq!(source.fetch_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_retried_in_full_next_call() {
        let dir = tempdir().unwrap();
        let cache = LogoCache::new(dir.path());
        cache.init().await.unwrap();

        let source = Arc::new(
            FakeSource::new(&[("acme.png", b"acme" as &[u8]), ("globex.png", b"globex")])
                .failing_on("globex.png"),
        );
        let service = LogoService::new(source.clone(), cache);

        assert!(service.list_logos().await.is_err());
        assert!(!service.cache_populated());

        // next call starts over from the object store
        assert!(service.list_logos().await.is_err());
        assert_eq!(source.list_calls.load(Ordering::SeqCst), 2);
    }
}
