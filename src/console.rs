//! Interactive console menu over the catalog service.
//!
//! The menu reads line-based answers from any `BufRead` and writes to any
//! `Write`, so the binary wires it to stdin/stdout and tests feed it scripted
//! input. Invalid answers and unknown ids are reported and the loop goes on;
//! end of input behaves like choosing `0`.

use std::io::{BufRead, Write};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, NewBook},
        enums::{BookStatus, Category},
    },
    services::catalog::CatalogService,
};

const MENU: &str = "\n--- Library Menu ---
1 - Add book
2 - List books
3 - Search books by title, author or publisher
4 - Update availability
5 - Delete book (physical removal)
6 - Delete book (logical removal)
0 - Exit";

enum Flow {
    Continue,
    Exit,
}

/// Run the menu loop until the user exits or input ends
pub async fn run<R: BufRead, W: Write>(catalog: &CatalogService, input: R, output: W) -> AppResult<()> {
    Menu { catalog, input, output }.run().await
}

struct Menu<'a, R, W> {
    catalog: &'a CatalogService,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<'_, R, W> {
    async fn run(&mut self) -> AppResult<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };

            let result = match choice.as_str() {
                "1" => self.add_book().await,
                "2" => self.list_books().await,
                "3" => self.search_books().await,
                "4" => self.update_availability().await,
                "5" => self.delete_book().await,
                "6" => self.soft_delete_book().await,
                "0" => Ok(Flow::Exit),
                _ => {
                    writeln!(self.output, "Invalid option. Try again.")?;
                    Ok(Flow::Continue)
                }
            };

            match result {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(AppError::Validation(msg)) => writeln!(self.output, "{}", msg)?,
                Err(AppError::NotFound(_)) => writeln!(self.output, "Book not found.")?,
                Err(e) => return Err(e),
            }
        }

        writeln!(self.output, "Exiting...")?;
        self.output.flush()?;
        Ok(())
    }

    /// Print `label` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, label: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    async fn add_book(&mut self) -> AppResult<Flow> {
        let Some(title) = self.prompt("Title: ")? else { return Ok(Flow::Exit) };
        let Some(author) = self.prompt("Author: ")? else { return Ok(Flow::Exit) };
        let Some(publisher) = self.prompt("Publisher: ")? else { return Ok(Flow::Exit) };

        writeln!(self.output, "\n--- Categories ---")?;
        for category in Category::ALL {
            writeln!(self.output, "{}: {}", category.code(), category)?;
        }
        let Some(answer) = self.prompt("Choose a category (number): ")? else { return Ok(Flow::Exit) };
        let category = parse_category(&answer)?;

        let Some(answer) = self.prompt("Year: ")? else { return Ok(Flow::Exit) };
        let year = answer
            .parse::<i32>()
            .map_err(|_| AppError::Validation("Invalid year. Try again.".to_string()))?;

        let Some(answer) = self.prompt("Available (1 for yes, 0 for no): ")? else { return Ok(Flow::Exit) };
        let available = parse_flag(&answer)?;

        let book = self
            .catalog
            .add_book(&NewBook {
                title,
                author,
                publisher,
                category,
                year: Some(year),
                available,
                status: BookStatus::Active,
            })
            .await?;

        writeln!(self.output, "Book added successfully! (ID: {})", book.id)?;
        Ok(Flow::Continue)
    }

    async fn list_books(&mut self) -> AppResult<Flow> {
        let books = self.catalog.list_books().await?;
        if books.is_empty() {
            writeln!(self.output, "No books found.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "\n--- Book List ---")?;
        for book in &books {
            writeln!(
                self.output,
                "ID: {} | Title: {} | Author: {} | Available: {} | Status: {}",
                book.id,
                book.title,
                book.author,
                if book.available { "Yes" } else { "No" },
                capitalize(book.status.as_str()),
            )?;
        }
        Ok(Flow::Continue)
    }

    async fn search_books(&mut self) -> AppResult<Flow> {
        let Some(term) = self.prompt("Enter title, author or publisher: ")? else { return Ok(Flow::Exit) };

        let books = self.catalog.search_books(&term).await?;
        if books.is_empty() {
            writeln!(self.output, "No books match the search term.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "\n--- Search Results ---")?;
        for Book { id, title, author, publisher, .. } in &books {
            writeln!(
                self.output,
                "ID: {} | Title: {} | Author: {} | Publisher: {}",
                id, title, author, publisher
            )?;
        }
        Ok(Flow::Continue)
    }

    async fn update_availability(&mut self) -> AppResult<Flow> {
        let Some(answer) = self.prompt("Book ID: ")? else { return Ok(Flow::Exit) };
        let id = parse_id(&answer)?;
        let Some(answer) = self.prompt("New availability (1 for yes, 0 for no): ")? else {
            return Ok(Flow::Exit);
        };
        let available = parse_flag(&answer)?;

        self.catalog.set_availability(id, available).await?;
        writeln!(self.output, "Availability updated successfully!")?;
        Ok(Flow::Continue)
    }

    async fn delete_book(&mut self) -> AppResult<Flow> {
        let Some(answer) = self.prompt("Book ID to delete permanently: ")? else { return Ok(Flow::Exit) };
        let id = parse_id(&answer)?;

        self.catalog.delete_book(id).await?;
        writeln!(self.output, "Book permanently deleted!")?;
        Ok(Flow::Continue)
    }

    async fn soft_delete_book(&mut self) -> AppResult<Flow> {
        let Some(answer) = self.prompt("Book ID to mark as deleted: ")? else { return Ok(Flow::Exit) };
        let id = parse_id(&answer)?;

        self.catalog.soft_delete_book(id).await?;
        writeln!(self.output, "Book marked as deleted!")?;
        Ok(Flow::Continue)
    }
}

fn parse_category(answer: &str) -> AppResult<Category> {
    let parsed = match answer.parse::<i64>() {
        Ok(code) => Category::try_from(code),
        Err(_) => answer.parse::<Category>(),
    };
    parsed.map_err(|_| AppError::Validation("Invalid category. Try again.".to_string()))
}

fn parse_flag(answer: &str) -> AppResult<bool> {
    match answer {
        "1" => Ok(true),
        "0" => Ok(false),
        _ => Err(AppError::Validation("Invalid availability, use 1 or 0. Try again.".to_string())),
    }
}

fn parse_id(answer: &str) -> AppResult<i64> {
    answer
        .parse::<i64>()
        .map_err(|_| AppError::Validation("Invalid ID. Try again.".to_string()))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
