use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::info;

use crate::types::BlogRow;

/// The demo posts inserted at provisioning time.
pub fn seed_blogs() -> Vec<BlogRow> {
    vec![
        BlogRow {
            id: "1".to_string(),
            title: "API Gateway 101".to_string(),
            body: "This is a dummy post on API Gateway".to_string(),
            date: NaiveDate::from_ymd_opt(2021, 1, 1).expect("valid seed date"),
        },
        BlogRow {
            id: "2".to_string(),
            title: "Getting started with Lambda".to_string(),
            body: "This is a dummy post on Lambda".to_string(),
            date: NaiveDate::from_ymd_opt(2021, 2, 1).expect("valid seed date"),
        },
        BlogRow {
            id: "3".to_string(),
            title: "DynamoDB in action".to_string(),
            body: "This is a dummy post on DynamoDB".to_string(),
            date: NaiveDate::from_ymd_opt(2021, 3, 1).expect("valid seed date"),
        },
    ]
}

/// Insert the demo posts, skipping ids that already exist.
///
/// Provisioning runs this on every deploy, so the insert must converge:
/// re-running leaves existing rows untouched and returns the number of rows
/// actually inserted this time.
pub async fn seed(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let mut inserted = 0u64;

    for blog in seed_blogs() {
        let result = sqlx::query(
            "INSERT INTO blogs (id, title, body, date) VALUES ($1, $2, $3, $4) \
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(&blog.id)
        .bind(&blog.title)
        .bind(&blog.body)
        .bind(blog.date)
        .execute(pool)
        .await?;

        inserted += result.rows_affected();
    }

    info!(inserted, "Seeded blogs table");
    Ok(inserted)
}
