//! Book domain methods on Repository

use super::{integrity_error, Repository};
use crate::{
    error::AppResult,
    models::{
        book::{Book, NewBook},
        enums::BookStatus,
    },
};

/// Unicode-aware case fold shared by the stored text and the search term
fn fold(text: &str) -> String {
    text.to_lowercase()
}

impl Repository {
    /// Insert a book and return its generated id
    pub async fn books_create(&self, data: &NewBook) -> AppResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO livros (titulo, autor, editora, categoria, ano, disponivel, livro_status)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(data.title.trim())
        .bind(data.author.trim())
        .bind(data.publisher.trim())
        .bind(data.category)
        .bind(data.year)
        .bind(data.available)
        .bind(data.status)
        .execute(&self.pool)
        .await
        .map_err(|e| integrity_error("Failed to add book", e))?;

        Ok(result.last_insert_rowid())
    }

    /// Get book by ID
    pub async fn books_get_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>("SELECT * FROM livros WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(book)
    }

    /// List every book, logically deleted ones included
    pub async fn books_list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT * FROM livros")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Case-insensitive substring search over title, author and publisher.
    ///
    /// SQLite's `lower()` only folds ASCII, so matching happens here with the
    /// same fold applied to both sides.
    pub async fn books_search(&self, term: &str) -> AppResult<Vec<Book>> {
        let needle = fold(term.trim());

        let rows = self
            .books_list()
            .await?
            .into_iter()
            .filter(|book| {
                [&book.title, &book.author, &book.publisher]
                    .into_iter()
                    .any(|field| fold(field).contains(&needle))
            })
            .collect();
        Ok(rows)
    }

    /// Set the availability flag. Returns false when no book has this id.
    pub async fn books_set_availability(&self, id: i64, available: bool) -> AppResult<bool> {
        let result = sqlx::query("UPDATE livros SET disponivel = ? WHERE id = ?")
            .bind(available)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| integrity_error("Failed to update availability", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently remove a book whatever its status
    pub async fn books_delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM livros WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark a book as deleted, leaving the row and its availability in place
    pub async fn books_soft_delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("UPDATE livros SET livro_status = ? WHERE id = ?")
            .bind(BookStatus::Deleted)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
