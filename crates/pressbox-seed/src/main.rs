//! One-shot provisioning for the Pressbox stores
//!
//! Runs the relational migrations, seeds the demo posts, and upserts the
//! document table's seed records. Safe to re-run: both seed paths converge
//! instead of duplicating. A nonzero exit means the deployment failed.

use chrono::NaiveDate;
use kv_store_client::{KvBlog, KvStoreClient, ReadConsistency};
use sqlx::postgres::PgPoolOptions;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pressbox_seed=info".into()),
        )
        .init();

    if let Err(e) = run().await {
        error!(error = %e, "Seeding failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "postgres://localhost/pressbox".to_string());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    pressbox_db::migrate::migrate(&pool).await?;
    let inserted = pressbox_db::seed::seed(&pool).await?;
    info!(inserted, "Relational store seeded");

    let store_url =
        std::env::var("KV_STORE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
    let table = std::env::var("KV_TABLE").unwrap_or_else(|_| "blogs".to_string());

    // Seed writes go to the store endpoint, never through the accelerator
    let kv = KvStoreClient::new(&store_url, &table, ReadConsistency::Strong);
    kv.batch_put(&kv_seed_blogs()).await?;
    info!(table = %table, "Document table seeded");

    Ok(())
}

/// The demo records for the document table
fn kv_seed_blogs() -> Vec<KvBlog> {
    vec![
        KvBlog {
            id: "1".to_string(),
            title: "Lambda News".to_string(),
            body: "Lambda memory increased to 10GB".to_string(),
            date: NaiveDate::from_ymd_opt(2021, 1, 1).expect("valid seed date"),
        },
        KvBlog {
            id: "2".to_string(),
            title: "Serverless Kafka!".to_string(),
            body: "Serverless MSK is now a thing!".to_string(),
            date: NaiveDate::from_ymd_opt(2021, 2, 1).expect("valid seed date"),
        },
        KvBlog {
            id: "3".to_string(),
            title: "DynamoDB Infrequent Access".to_string(),
            body: "this could save you 60% costs".to_string(),
            date: NaiveDate::from_ymd_opt(2021, 3, 1).expect("valid seed date"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_kv_seed_blogs_have_unique_ids() {
        let blogs = kv_seed_blogs();
        let ids: HashSet<_> = blogs.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids.len(), blogs.len());
    }

    #[test]
    fn test_kv_seed_blogs_content() {
        let blogs = kv_seed_blogs();
        assert_eq!(blogs.len(), 3);
        assert_eq!(blogs[0].title, "Lambda News");
    }
}
