use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::error::{KvStoreError, Result};
use crate::types::{BatchPutRequest, KvBlog, ScanResponse};

/// Consistency level issued with point and scan reads.
///
/// The accelerator endpoint only serves eventually consistent reads, so
/// clients pointed at it are constructed with `Eventual`; the store
/// endpoint additionally offers `Strong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadConsistency {
    Eventual,
    Strong,
}

impl ReadConsistency {
    fn query_value(self) -> &'static str {
        match self {
            ReadConsistency::Eventual => "false",
            ReadConsistency::Strong => "true",
        }
    }
}

/// HTTP client for one document-store endpoint.
///
/// Which endpoint (store or accelerator) and which consistency level a
/// client uses is fixed at construction, so every caller issues the same
/// logical query regardless of which path it was handed.
pub struct KvStoreClient {
    client: Client,
    base_url: String,
    table: String,
    consistency: ReadConsistency,
}

impl KvStoreClient {
    pub fn new(base_url: &str, table: &str, consistency: ReadConsistency) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            table: table.to_string(),
            consistency,
        }
    }

    /// Fetch a single blog record by id. `Ok(None)` when the table holds no
    /// matching item.
    pub async fn get_item(&self, id: &str) -> Result<Option<KvBlog>> {
        let url = format!(
            "{}/tables/{}/items/{}?consistent={}",
            self.base_url,
            self.table,
            urlencoding::encode(id),
            self.consistency.query_value()
        );
        debug!(id, url = %url, "Fetching blog item");

        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            status => {
                warn!(id, status = %status, "Document store returned error status");
                Err(KvStoreError::Status(status.as_u16()))
            }
        }
    }

    /// Scan the whole table.
    pub async fn scan(&self) -> Result<Vec<KvBlog>> {
        let url = format!(
            "{}/tables/{}/items?consistent={}",
            self.base_url,
            self.table,
            self.consistency.query_value()
        );
        debug!(url = %url, "Scanning blog table");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "Document store scan failed");
            return Err(KvStoreError::Status(response.status().as_u16()));
        }

        let scan: ScanResponse = response.json().await?;
        debug!(count = scan.items.len(), "Scanned blog table");
        Ok(scan.items)
    }

    /// Upsert a single blog record.
    pub async fn put_item(&self, blog: &KvBlog) -> Result<()> {
        let url = format!(
            "{}/tables/{}/items/{}",
            self.base_url,
            self.table,
            urlencoding::encode(&blog.id)
        );
        debug!(id = %blog.id, "Writing blog item");

        let response = self.client.put(&url).json(blog).send().await?;

        if !response.status().is_success() {
            warn!(id = %blog.id, status = %response.status(), "Document store write failed");
            return Err(KvStoreError::Status(response.status().as_u16()));
        }
        Ok(())
    }

    /// Upsert a batch of blog records.
    ///
    /// The batch endpoint overwrites existing ids, so re-running a seed
    /// converges instead of duplicating records.
    pub async fn batch_put(&self, blogs: &[KvBlog]) -> Result<()> {
        let url = format!("{}/tables/{}/batch", self.base_url, self.table);
        debug!(count = blogs.len(), "Writing blog batch");

        let response = self
            .client
            .post(&url)
            .json(&BatchPutRequest { items: blogs })
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "Document store batch write failed");
            return Err(KvStoreError::Status(response.status().as_u16()));
        }
        Ok(())
    }
}
