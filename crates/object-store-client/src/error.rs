//! Error types for the object storage client

use std::fmt;

#[derive(Debug)]
pub enum ObjectStoreError {
    Http(Box<reqwest::Error>),
    Api(String),
}

impl fmt::Display for ObjectStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectStoreError::Http(err) => write!(f, "HTTP error: {}", err),
            ObjectStoreError::Api(msg) => write!(f, "Object store error: {}", msg),
        }
    }
}

impl std::error::Error for ObjectStoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ObjectStoreError::Http(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ObjectStoreError {
    fn from(err: reqwest::Error) -> Self {
        ObjectStoreError::Http(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, ObjectStoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ObjectStoreError::Api("bucket not found".to_string());
        assert_eq!(format!("{}", err), "Object store error: bucket not found");
    }
}
