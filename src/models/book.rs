//! Book model and request types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::{BookStatus, Category};

/// Catalog record as stored in the `livros` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    #[sqlx(rename = "titulo")]
    pub title: String,
    #[sqlx(rename = "autor")]
    pub author: String,
    #[sqlx(rename = "editora")]
    pub publisher: String,
    /// Category code (1=romance, 2=action, 3=fiction, 4=comedy, 5=suspense, 6=horror, 99=other)
    #[sqlx(rename = "categoria")]
    #[schema(value_type = i64, example = 3)]
    pub category: Category,
    #[sqlx(rename = "ano")]
    pub year: Option<i32>,
    #[sqlx(rename = "disponivel")]
    pub available: bool,
    /// Status code (1=active, 2=inactive, 9=deleted)
    #[sqlx(rename = "livro_status")]
    #[schema(value_type = i64, example = 1)]
    pub status: BookStatus,
}

/// Values for a new row; text fields are trimmed on insert
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub category: Category,
    pub year: Option<i32>,
    pub available: bool,
    pub status: BookStatus,
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    #[validate(length(min = 1, message = "Publisher is required"))]
    pub publisher: String,
    /// Category name (`fiction`) or code (`3`)
    #[schema(value_type = String, example = "fiction")]
    pub category: Category,
    pub year: i32,
    /// Defaults to true
    pub available: Option<bool>,
}

impl From<CreateBook> for NewBook {
    fn from(data: CreateBook) -> Self {
        Self {
            title: data.title,
            author: data.author,
            publisher: data.publisher,
            category: data.category,
            year: Some(data.year),
            available: data.available.unwrap_or(true),
            status: BookStatus::Active,
        }
    }
}

/// Search query parameters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Substring matched against title, author and publisher (case-insensitive)
    pub term: String,
}

/// Availability update query parameters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AvailabilityQuery {
    /// `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off` (case-insensitive)
    #[serde(deserialize_with = "deserialize_flag")]
    pub available: bool,
}

/// Parse the boolean spellings accepted in query strings
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" | "on" => Some(true),
        "false" | "f" | "0" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_flag(&value).ok_or_else(|| serde::de::Error::custom(format!("invalid boolean value: {}", value)))
}

/// Confirmation body for update and delete endpoints
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
