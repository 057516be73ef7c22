//! Object Storage Client
//!
//! Lists and fetches objects from one bucket of an object-storage JSON API
//! (listing returns `{"items": [{"name": ...}]}`; object content is fetched
//! with `?alt=media`).

mod client;
mod error;
mod types;

pub use client::ObjectStoreClient;
pub use error::{ObjectStoreError, Result};
pub use types::ObjectInfo;
