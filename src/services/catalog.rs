//! Catalog management service

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, NewBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Add a book and return the stored record
    pub async fn add_book(&self, data: &NewBook) -> AppResult<Book> {
        for (field, value) in [
            ("Title", &data.title),
            ("Author", &data.author),
            ("Publisher", &data.publisher),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{} cannot be empty", field)));
            }
        }

        let id = self.repository.books_create(data).await?;
        tracing::info!(id, title = %data.title.trim(), "Book added");

        self.get_book(id).await
    }

    /// Get book by ID
    pub async fn get_book(&self, id: i64) -> AppResult<Book> {
        self.repository
            .books_get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books_list().await
    }

    pub async fn search_books(&self, term: &str) -> AppResult<Vec<Book>> {
        let books = self.repository.books_search(term).await?;
        tracing::debug!(term, matches = books.len(), "Book search");
        Ok(books)
    }

    pub async fn set_availability(&self, id: i64, available: bool) -> AppResult<()> {
        if !self.repository.books_set_availability(id, available).await? {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        tracing::info!(id, available, "Book availability updated");
        Ok(())
    }

    /// Physical delete
    pub async fn delete_book(&self, id: i64) -> AppResult<()> {
        if !self.repository.books_delete(id).await? {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        tracing::info!(id, "Book deleted");
        Ok(())
    }

    /// Logical delete
    pub async fn soft_delete_book(&self, id: i64) -> AppResult<()> {
        if !self.repository.books_soft_delete(id).await? {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        tracing::info!(id, "Book marked as deleted");
        Ok(())
    }
}
