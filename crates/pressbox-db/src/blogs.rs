use crate::types::BlogRow;

/// Fetch every row matching a blog id.
///
/// Ids are unique by contract, so this returns at most one row from a
/// healthy table. Callers treat more than one match as a data integrity
/// violation: log it and serve the first row rather than failing the read.
pub async fn get(
    executor: impl sqlx::PgExecutor<'_>,
    id: &str,
) -> Result<Vec<BlogRow>, sqlx::Error> {
    sqlx::query_as::<_, BlogRow>("SELECT id, title, body, date FROM blogs WHERE id = $1")
        .bind(id)
        .fetch_all(executor)
        .await
}

/// List all blogs in store order
pub async fn list(executor: impl sqlx::PgExecutor<'_>) -> Result<Vec<BlogRow>, sqlx::Error> {
    sqlx::query_as::<_, BlogRow>("SELECT id, title, body, date FROM blogs ORDER BY id")
        .fetch_all(executor)
        .await
}
