//! File-based logo cache with all-or-nothing population
//!
//! Stores the full logo set on disk for the lifetime of one process
//! instance. The cache is populated in a single pass and only marked
//! populated once every write succeeded, so a half-written cache is never
//! served as complete. There is no expiry at this layer.

mod cache;
mod types;

pub use cache::LogoCache;
pub use types::CachedLogo;
