//! Core types for the Pressbox KV API

use chrono::{DateTime, NaiveDate, Utc};
use kv_store_client::KvBlog;
use serde::{Deserialize, Serialize};

/// Configuration for the KV API service
#[derive(Debug, Clone)]
pub struct KvApiConfig {
    pub port: u16,
    pub store_url: String,
    pub accelerator_url: String,
    pub table: String,
}

/// A blog record shaped for the wire, stamped at response time so a human
/// operator can see which cache layer served the request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: NaiveDate,
    pub response_date_time: DateTime<Utc>,
}

impl BlogResponse {
    pub fn stamped(blog: KvBlog) -> Self {
        Self {
            id: blog.id,
            title: blog.title,
            body: blog.body,
            date: blog.date,
            response_date_time: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogListResponse {
    pub items: Vec<KvBlog>,
    pub response_date_time: DateTime<Utc>,
}

/// Body of the update mutation
#[derive(Debug, Deserialize)]
pub struct UpdateBlogRequest {
    pub title: String,
    pub body: String,
    pub date: NaiveDate,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_response_stamp_and_field_names() {
        let response = BlogResponse::stamped(KvBlog {
            id: "1".to_string(),
            title: "Lambda News".to_string(),
            body: "Lambda memory increased to 10GB".to_string(),
            date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
        });

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"responseDateTime\""));
        assert!(json.contains("Lambda News"));
    }

    #[test]
    fn test_update_request_deserialization() {
        let json = r#"{"title": "edited", "body": "new body", "date": "2021-05-01"}"#;
        let request: UpdateBlogRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.title, "edited");
        assert_eq!(request.date, NaiveDate::from_ymd_opt(2021, 5, 1).unwrap());
    }
}
