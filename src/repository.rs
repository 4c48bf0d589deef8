//! Book Repository: translates the five operations into parameterized SQL
//! against the books table and maps rows back to [`Book`].

use crate::error::AppError;
use crate::model::{Book, BOOK_COLUMNS};
use sqlx::PgPool;

/// PostgreSQL error code for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// Columns that accept equality filters on GET /books, with their bind type.
/// Order here fixes the placeholder order, so generated SQL is deterministic.
const FILTER_COLUMNS: &[(&str, FilterKind)] = &[
    ("isbn", FilterKind::Text),
    ("amazon_url", FilterKind::Text),
    ("author", FilterKind::Text),
    ("language", FilterKind::Text),
    ("pages", FilterKind::Int),
    ("publisher", FilterKind::Text),
    ("title", FilterKind::Text),
    ("year", FilterKind::Int),
];

#[derive(Clone, Copy, Debug)]
enum FilterKind {
    Text,
    Int,
}

/// A typed value bound into a list filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Int(i32),
}

/// Turn raw query-string pairs into typed filters. Unknown keys are ignored;
/// integer columns reject non-numeric values.
pub fn parse_filters(
    params: &std::collections::HashMap<String, String>,
) -> Result<Vec<(&'static str, FilterValue)>, AppError> {
    let mut filters = Vec::new();
    for (col, kind) in FILTER_COLUMNS {
        let Some(raw) = params.get(*col) else {
            continue;
        };
        let value = match kind {
            FilterKind::Text => FilterValue::Text(raw.clone()),
            FilterKind::Int => {
                let n: i32 = raw.parse().map_err(|_| {
                    AppError::validation(format!("{col} filter must be an integer"))
                })?;
                FilterValue::Int(n)
            }
        };
        filters.push((*col, value));
    }
    Ok(filters)
}

/// SELECT for the list operation: WHERE clause from the filters, one `$n`
/// placeholder per value, ordered by isbn so results are deterministic.
fn build_list_sql(filters: &[(&'static str, FilterValue)]) -> String {
    let mut sql = format!("SELECT {BOOK_COLUMNS} FROM books");
    for (i, (col, _)) in filters.iter().enumerate() {
        if i == 0 {
            sql.push_str(" WHERE ");
        } else {
            sql.push_str(" AND ");
        }
        sql.push_str(&format!("{} = ${}", col, i + 1));
    }
    sql.push_str(" ORDER BY isbn");
    sql
}

#[derive(Clone)]
pub struct BookRepository {
    pool: PgPool,
}

impl BookRepository {
    pub fn new(pool: PgPool) -> Self {
        BookRepository { pool }
    }

    /// All books, optionally narrowed by equality filters.
    pub async fn list(
        &self,
        filters: &[(&'static str, FilterValue)],
    ) -> Result<Vec<Book>, AppError> {
        let sql = build_list_sql(filters);
        tracing::debug!(sql = %sql, "query");
        let mut query = sqlx::query_as::<_, Book>(&sql);
        for (_, value) in filters {
            query = match value {
                FilterValue::Text(s) => query.bind(s.clone()),
                FilterValue::Int(n) => query.bind(*n),
            };
        }
        let books = query.fetch_all(&self.pool).await?;
        Ok(books)
    }

    /// One book by primary key, or NotFound.
    pub async fn get_by_isbn(&self, isbn: &str) -> Result<Book, AppError> {
        let sql = format!("SELECT {BOOK_COLUMNS} FROM books WHERE isbn = $1");
        tracing::debug!(sql = %sql, isbn = %isbn, "query");
        let book = sqlx::query_as::<_, Book>(&sql)
            .bind(isbn)
            .fetch_optional(&self.pool)
            .await?;
        book.ok_or_else(|| AppError::NotFound(format!("book {isbn}")))
    }

    /// Insert a new book; a duplicate isbn is a Conflict.
    pub async fn create(&self, book: &Book) -> Result<Book, AppError> {
        let sql = format!(
            "INSERT INTO books (isbn, amazon_url, author, language, pages, publisher, title, year) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {BOOK_COLUMNS}"
        );
        tracing::debug!(sql = %sql, isbn = %book.isbn, "query");
        let created = sqlx::query_as::<_, Book>(&sql)
            .bind(&book.isbn)
            .bind(&book.amazon_url)
            .bind(&book.author)
            .bind(&book.language)
            .bind(book.pages)
            .bind(&book.publisher)
            .bind(&book.title)
            .bind(book.year)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                    AppError::Conflict(format!("book {} already exists", book.isbn))
                }
                _ => AppError::Db(e),
            })?;
        Ok(created)
    }

    /// Update every mutable field of the row matching `isbn`, or NotFound.
    /// The key itself never changes.
    pub async fn update(&self, isbn: &str, book: &Book) -> Result<Book, AppError> {
        let sql = format!(
            "UPDATE books \
             SET amazon_url = $1, author = $2, language = $3, pages = $4, \
                 publisher = $5, title = $6, year = $7 \
             WHERE isbn = $8 \
             RETURNING {BOOK_COLUMNS}"
        );
        tracing::debug!(sql = %sql, isbn = %isbn, "query");
        let updated = sqlx::query_as::<_, Book>(&sql)
            .bind(&book.amazon_url)
            .bind(&book.author)
            .bind(&book.language)
            .bind(book.pages)
            .bind(&book.publisher)
            .bind(&book.title)
            .bind(book.year)
            .bind(isbn)
            .fetch_optional(&self.pool)
            .await?;
        updated.ok_or_else(|| AppError::NotFound(format!("book {isbn}")))
    }

    /// Delete the row matching `isbn`, or NotFound.
    pub async fn remove(&self, isbn: &str) -> Result<(), AppError> {
        let sql = "DELETE FROM books WHERE isbn = $1 RETURNING isbn";
        tracing::debug!(sql = %sql, isbn = %isbn, "query");
        let deleted = sqlx::query(sql)
            .bind(isbn)
            .fetch_optional(&self.pool)
            .await?;
        if deleted.is_none() {
            return Err(AppError::NotFound(format!("book {isbn}")));
        }
        Ok(())
    }
}
