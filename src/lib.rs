//! Books API: JSON-over-HTTP CRUD for a PostgreSQL books table.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod response;
pub mod routes;
pub mod schema;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::AppError;
pub use model::Book;
pub use repository::BookRepository;
pub use routes::{book_routes, common_routes};
pub use state::AppState;
pub use store::ensure_books_table;

use axum::Router;
use tower_http::trace::TraceLayer;

/// The full application router: books CRUD plus health/readiness/version,
/// with request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(book_routes(state))
        .layer(TraceLayer::new_for_http())
}
