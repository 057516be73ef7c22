use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Blog row returned from SELECT queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct BlogRow {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: NaiveDate,
}
