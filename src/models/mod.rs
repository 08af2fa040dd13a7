//! Data models for Biblioteca

pub mod book;
pub mod enums;

// Re-export commonly used types
pub use book::{Book, CreateBook, NewBook};
pub use enums::{BookStatus, Category};
