//! Biblioteca console - interactive menu over the book catalog

use std::io;

use biblioteca_server::{config::AppConfig, console, db, logging, repository::Repository, services::Services};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init(&config.logging);

    let pool = db::open(&config.database).await?;
    let services = Services::new(Repository::new(pool));

    console::run(&services.catalog, io::stdin().lock(), io::stdout().lock()).await?;

    Ok(())
}
