mod cli;
mod error;

use crate::cli::{Cli, Command, LogLevel};
use crate::error::{ErrorKind, Result};
use clap::Parser;
use exn::ResultExt;
use shelf_catalog::Catalog;
use shelf_config::Config;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn initialize_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref()).or_raise(|| ErrorKind::Config)?;
    let files = match cli.data_dir {
        Some(dir) => config.data.with_dir(dir),
        None => config.data,
    };
    let mut catalog = Catalog::new();
    let summary = shelf_library::load_data(&mut catalog, &files).or_raise(|| ErrorKind::Load)?;
    match cli.command {
        Command::Load => {
            println!("Books:     {}", summary.books);
            println!("Authors:   {}", summary.authors);
            println!("Tags:      {}", summary.tags);
            println!("Book tags: {}", summary.book_tags);
        },
        Command::Author { name } => match catalog.books_by_author(&name) {
            Some(author) => {
                println!("{author}");
                for book in catalog.author_books(author) {
                    println!("  {}", book.or_raise(|| ErrorKind::Query)?);
                }
            },
            None => println!("No author named \"{name}\""),
        },
        Command::Best => {
            let book = catalog.best_book().or_raise(|| ErrorKind::Query)?;
            println!("{book}");
        },
        Command::Tag { tag_id } => {
            println!("{}", catalog.count_books_by_tag(&tag_id));
        },
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    initialize_tracing(cli.log_level);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        },
    }
}
