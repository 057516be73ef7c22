//! Error types for the Pressbox KV API

use std::fmt;

#[derive(Debug)]
pub enum KvApiError {
    Config(String),
    Io(Box<std::io::Error>),
}

impl fmt::Display for KvApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KvApiError::Config(msg) => write!(f, "Configuration error: {}", msg),
            KvApiError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for KvApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KvApiError::Io(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for KvApiError {
    fn from(err: std::io::Error) -> Self {
        KvApiError::Io(Box::new(err))
    }
}

impl From<tracing_subscriber::filter::ParseError> for KvApiError {
    fn from(err: tracing_subscriber::filter::ParseError) -> Self {
        KvApiError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, KvApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = KvApiError::Config("missing KV_STORE_URL".to_string());
        assert_eq!(
            format!("{}", err),
            "Configuration error: missing KV_STORE_URL"
        );
    }

    #[test]
    fn test_error_is_debug() {
        let err = KvApiError::Config("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Config"));
    }
}
