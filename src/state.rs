//! Shared application state for all routes.

use crate::repository::BookRepository;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub books: BookRepository,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        AppState {
            books: BookRepository::new(pool.clone()),
            pool,
        }
    }
}
