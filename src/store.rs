//! Bootstrap DDL for the books table.

use crate::error::AppError;
use sqlx::PgPool;

/// Create the books table if it does not exist. Constraints mirror the
/// request schema so bad data cannot arrive through any other client either.
pub async fn ensure_books_table(pool: &PgPool) -> Result<(), AppError> {
    let ddl = r#"
        CREATE TABLE IF NOT EXISTS books (
            isbn TEXT PRIMARY KEY,
            amazon_url TEXT NOT NULL,
            author TEXT NOT NULL,
            language TEXT NOT NULL,
            pages INTEGER NOT NULL CHECK (pages >= 1),
            publisher TEXT NOT NULL,
            title TEXT NOT NULL,
            year INTEGER NOT NULL CHECK (year >= 0)
        )
    "#;
    sqlx::query(ddl).execute(pool).await?;
    Ok(())
}
