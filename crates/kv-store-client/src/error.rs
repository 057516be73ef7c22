//! Error types for the document store client

use std::fmt;

#[derive(Debug)]
pub enum KvStoreError {
    Http(Box<reqwest::Error>),
    Status(u16),
}

impl fmt::Display for KvStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KvStoreError::Http(err) => write!(f, "HTTP error: {}", err),
            KvStoreError::Status(status) => {
                write!(f, "Document store returned status {}", status)
            }
        }
    }
}

impl std::error::Error for KvStoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KvStoreError::Http(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for KvStoreError {
    fn from(err: reqwest::Error) -> Self {
        KvStoreError::Http(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, KvStoreError>;
