//! Wire types for the document store

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A blog record as stored in the document table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KvBlog {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScanResponse {
    #[serde(default)]
    pub items: Vec<KvBlog>,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchPutRequest<'a> {
    pub items: &'a [KvBlog],
}
