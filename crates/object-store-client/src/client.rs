use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::error::{ObjectStoreError, Result};
use crate::types::{ListObjectsResponse, ObjectInfo};

/// HTTP client for one object storage bucket
pub struct ObjectStoreClient {
    client: Client,
    base_url: String,
    bucket: String,
}

impl ObjectStoreClient {
    pub fn new(base_url: &str, bucket: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            bucket: bucket.to_string(),
        }
    }

    /// List every object in the bucket
    pub async fn list_objects(&self) -> Result<Vec<ObjectInfo>> {
        let url = format!("{}/storage/v1/b/{}/o", self.base_url, self.bucket);
        debug!(bucket = %self.bucket, url = %url, "Listing bucket objects");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            warn!(bucket = %self.bucket, status = %response.status(), "Bucket listing failed");
            return Err(ObjectStoreError::Api(format!(
                "listing returned status {}",
                response.status()
            )));
        }

        let listing: ListObjectsResponse = response.json().await?;
        debug!(
            bucket = %self.bucket,
            count = listing.items.len(),
            "Listed bucket objects"
        );
        Ok(listing.items)
    }

    /// Fetch one object's full content
    pub async fn fetch_object(&self, name: &str) -> Result<Vec<u8>> {
        let url = format!(
            "{}/storage/v1/b/{}/o/{}?alt=media",
            self.base_url,
            self.bucket,
            urlencoding::encode(name)
        );
        debug!(object = name, url = %url, "Fetching object");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            warn!(object = name, status = %response.status(), "Object fetch failed");
            return Err(ObjectStoreError::Api(format!(
                "fetching {} returned status {}",
                name,
                response.status()
            )));
        }

        let data = response.bytes().await?.to_vec();
        debug!(object = name, size = data.len(), "Fetched object");
        Ok(data)
    }
}
