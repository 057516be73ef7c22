//! Wire types for the object storage JSON API

use serde::Deserialize;

/// One entry in a bucket listing
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectInfo {
    pub name: String,
    #[serde(default)]
    pub size: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListObjectsResponse {
    #[serde(default)]
    pub items: Vec<ObjectInfo>,
}
