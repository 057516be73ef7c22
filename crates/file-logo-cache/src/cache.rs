use std::io::{Error, ErrorKind};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::fs;
use tracing::debug;

use crate::types::CachedLogo;

/// Process-local on-disk cache of the full logo set.
///
/// `store_all` flips the populated flag only after every file write
/// succeeded; on any failure the flag stays false and the caller is
/// expected to retry the full upstream fetch on the next request. Once
/// populated, the cache is served verbatim until the process instance is
/// recycled.
pub struct LogoCache {
    dir: PathBuf,
    populated: AtomicBool,
}

impl LogoCache {
    /// Create a cache rooted at `dir`. Call `init` to create the directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            populated: AtomicBool::new(false),
        }
    }

    /// Create the cache directory if it does not exist
    pub async fn init(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir).await
    }

    /// Whether a previous `store_all` completed in this process instance
    pub fn is_populated(&self) -> bool {
        self.populated.load(Ordering::Acquire)
    }

    /// Write every asset to the cache directory, then mark the cache
    /// populated.
    pub async fn store_all(&self, logos: &[CachedLogo]) -> std::io::Result<()> {
        for logo in logos {
            // Keys become file names; a key that escapes the cache
            // directory is a protocol violation from the object store.
            if logo.key.contains('/') || logo.key.contains("..") {
                return Err(Error::new(
                    ErrorKind::InvalidInput,
                    format!("invalid logo key: {}", logo.key),
                ));
            }
        }

        let writes = logos.iter().map(|logo| {
            let path = self.dir.join(&logo.key);
            async move { fs::write(&path, &logo.content).await }
        });
        futures::future::try_join_all(writes).await?;

        self.populated.store(true, Ordering::Release);
        debug!(count = logos.len(), dir = ?self.dir, "Cached logos on disk");
        Ok(())
    }

    /// Read every cached asset back from disk, keyed by file name
    pub async fn read_all(&self) -> std::io::Result<Vec<CachedLogo>> {
        let mut entries = fs::read_dir(&self.dir).await?;
        let mut logos = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            let key = entry.file_name().to_string_lossy().into_owned();
            let content = fs::read(entry.path()).await?;
            logos.push(CachedLogo { key, content });
        }

        // Directory enumeration order is platform-defined
        logos.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(logos)
    }
}
