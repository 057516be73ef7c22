use async_trait::async_trait;
use pressbox_db::{BlogRow, PgPool};

/// Read access to the durable blog store.
///
/// Handlers depend on this trait rather than the pool directly, so tests
/// can substitute a counting fake.
#[async_trait]
pub trait BlogStore: Send + Sync {
    async fn get(&self, id: &str) -> Result<Vec<BlogRow>, sqlx::Error>;
    async fn list(&self) -> Result<Vec<BlogRow>, sqlx::Error>;
}

/// PostgreSQL-backed blog store
pub struct PgBlogStore {
    pool: PgPool,
}

impl PgBlogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlogStore for PgBlogStore {
    async fn get(&self, id: &str) -> Result<Vec<BlogRow>, sqlx::Error> {
        pressbox_db::blogs::get(&self.pool, id).await
    }

    async fn list(&self) -> Result<Vec<BlogRow>, sqlx::Error> {
        pressbox_db::blogs::list(&self.pool).await
    }
}
