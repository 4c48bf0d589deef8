//! Books endpoint handlers: extract input, validate, delegate to the
//! repository, shape the response. No business logic lives here.

use crate::error::AppError;
use crate::model::Book;
use crate::repository::parse_filters;
use crate::response::{BookBody, BooksBody, MessageBody};
use crate::schema;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};
use std::collections::HashMap;

fn body_to_map(value: Value) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

/// Run schema validation, then deserialize into a typed [`Book`]. The schema
/// pass guarantees field presence and types, so deserialization failures here
/// are out-of-range values (e.g. pages beyond i32) and still report as 400.
fn parse_book(body: Map<String, Value>) -> Result<Book, AppError> {
    let violations = schema::validate(&body);
    if !violations.is_empty() {
        return Err(AppError::Validation(violations));
    }
    serde_json::from_value(Value::Object(body)).map_err(|e| AppError::validation(e.to_string()))
}

/// GET /books => `{books: [book, ...]}`, optionally narrowed by query filters.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<BooksBody>, AppError> {
    let filters = parse_filters(&params)?;
    let books = state.books.list(&filters).await?;
    Ok(Json(BooksBody { books }))
}

/// GET /books/:isbn => `{book: book}`.
pub async fn read(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Json<BookBody>, AppError> {
    let book = state.books.get_by_isbn(&isbn).await?;
    Ok(Json(BookBody { book }))
}

/// POST /books => 201 `{book: newBook}`.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<BookBody>), AppError> {
    let body = body_to_map(body)?;
    let book = parse_book(body)?;
    let book = state.books.create(&book).await?;
    Ok((StatusCode::CREATED, Json(BookBody { book })))
}

/// PUT /books/:isbn => `{book: updatedBook}`. A body isbn must match the path
/// isbn; an omitted body isbn means "keyed by the path" and is filled in
/// before schema validation.
pub async fn update(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<BookBody>, AppError> {
    let mut body = body_to_map(body)?;
    match body.get("isbn") {
        Some(v) if v.as_str() != Some(isbn.as_str()) => {
            return Err(AppError::BadRequest(
                "ISBN in body must match ISBN in URL".into(),
            ));
        }
        Some(_) => {}
        None => {
            body.insert("isbn".to_string(), Value::String(isbn.clone()));
        }
    }
    let book = parse_book(body)?;
    let book = state.books.update(&isbn, &book).await?;
    Ok(Json(BookBody { book }))
}

/// DELETE /books/:isbn => `{message: "Book deleted"}`.
pub async fn delete(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Json<MessageBody>, AppError> {
    state.books.remove(&isbn).await?;
    Ok(Json(MessageBody::deleted()))
}
