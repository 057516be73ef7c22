pub mod blogs;
pub mod migrate;
pub mod seed;
pub mod types;

pub use sqlx::postgres::PgPool;
pub use types::*;
