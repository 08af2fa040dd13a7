//! Book (catalog) endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{AvailabilityQuery, Book, CreateBook, MessageResponse, SearchQuery},
    AppState,
};

/// Add a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid input or constraint violation", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    WithRejection(Json(data), _): WithRejection<Json<CreateBook>, AppError>,
) -> AppResult<(StatusCode, Json<Book>)> {
    data.validate()?;
    let book = state.services.catalog.add_book(&data.into()).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// List all books, logically deleted ones included
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(books))
}

/// Search books by title, author or publisher
#[utoipa::path(
    get,
    path = "/books/search",
    tag = "books",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching books", body = Vec<Book>),
        (status = 400, description = "Missing search term", body = crate::error::ErrorResponse)
    )
)]
pub async fn search_books(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<SearchQuery>, AppError>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.search_books(&query.term).await?;
    Ok(Json(books))
}

/// Update book availability
#[utoipa::path(
    put,
    path = "/books/{id}/availability",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID"),
        AvailabilityQuery
    ),
    responses(
        (status = 200, description = "Availability updated", body = MessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_availability(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Query(query), _): WithRejection<Query<AvailabilityQuery>, AppError>,
) -> AppResult<Json<MessageResponse>> {
    state.services.catalog.set_availability(id, query.available).await?;
    Ok(Json(MessageResponse::new("Availability updated successfully.")))
}

/// Delete a book permanently
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> AppResult<Json<MessageResponse>> {
    state.services.catalog.delete_book(id).await?;
    Ok(Json(MessageResponse::new("Book permanently deleted.")))
}

/// Mark a book as deleted (logical delete)
#[utoipa::path(
    put,
    path = "/books/{id}/status",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book marked as deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn soft_delete_book(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> AppResult<Json<MessageResponse>> {
    state.services.catalog.soft_delete_book(id).await?;
    Ok(Json(MessageResponse::new("Book marked as deleted.")))
}
