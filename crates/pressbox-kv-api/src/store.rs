//! Injectable store abstraction over the configured KV endpoints

use async_trait::async_trait;
use kv_store_client::{KvBlog, KvStoreClient, KvStoreError};

/// Blog reads and writes against one configured document-store endpoint.
///
/// The service holds two instances: one routed through the accelerator and
/// one hitting the store directly. Tests substitute fakes.
#[async_trait]
pub trait KvBlogStore: Send + Sync {
    async fn get(&self, id: &str) -> Result<Option<KvBlog>, KvStoreError>;
    async fn list(&self) -> Result<Vec<KvBlog>, KvStoreError>;
    async fn put(&self, blog: &KvBlog) -> Result<(), KvStoreError>;
}

#[async_trait]
impl KvBlogStore for KvStoreClient {
    async fn get(&self, id: &str) -> Result<Option<KvBlog>, KvStoreError> {
        self.get_item(id).await
    }

    async fn list(&self) -> Result<Vec<KvBlog>, KvStoreError> {
        self.scan().await
    }

    async fn put(&self, blog: &KvBlog) -> Result<(), KvStoreError> {
        self.put_item(blog).await
    }
}
