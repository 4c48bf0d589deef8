//! The Book record: the single entity this service persists.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A book row. `isbn` is the primary key and never changes after creation;
/// every other field is mutable through PUT.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub isbn: String,
    pub amazon_url: String,
    pub author: String,
    pub language: String,
    pub pages: i32,
    pub publisher: String,
    pub title: String,
    pub year: i32,
}

/// Column list shared by every SELECT/RETURNING clause so row shape stays
/// consistent across operations.
pub const BOOK_COLUMNS: &str = "isbn, amazon_url, author, language, pages, publisher, title, year";
