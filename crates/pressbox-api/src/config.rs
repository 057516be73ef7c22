use std::env;

/// Application configuration parsed from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub object_store_url: String,
    pub logo_bucket: String,
    pub logo_cache_dir: String,
}

impl Config {
    /// Parse configuration from environment variables
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3002);

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/pressbox".to_string());

        let object_store_url = env::var("OBJECT_STORE_URL")
            .unwrap_or_else(|_| "https://storage.googleapis.com".to_string());

        let logo_bucket =
            env::var("LOGO_BUCKET").unwrap_or_else(|_| "pressbox-logos".to_string());

        let logo_cache_dir =
            env::var("LOGO_CACHE_DIR").unwrap_or_else(|_| "/tmp/pressbox-logos".to_string());

        Self {
            port,
            database_url,
            object_store_url,
            logo_bucket,
            logo_cache_dir,
        }
    }
}
