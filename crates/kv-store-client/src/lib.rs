//! Blog Document Store Client
//!
//! HTTP client for the document store holding blog records. The store's
//! look-aside accelerator exposes the same wire protocol on its own
//! endpoint, so a service constructs one client per endpoint and issues the
//! same logical queries against either. Accelerator reads are always
//! eventually consistent; the store endpoint additionally serves strongly
//! consistent reads.

mod client;
mod error;
mod types;

pub use client::{KvStoreClient, ReadConsistency};
pub use error::{KvStoreError, Result};
pub use types::KvBlog;
