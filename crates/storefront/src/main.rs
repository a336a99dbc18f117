//! Storefront entry point.

use std::process::ExitCode;

use storefront::{Config, Storefront};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> ExitCode {
    let config = Config::from_env();

    // 1. Initialize tracing (stderr, so stdout carries only the rendered pages)
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // 2. Load the catalog
    let catalog = match config.load_catalog() {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!(error = %err, path = ?config.catalog_path, "failed to load catalog");
            return ExitCode::FAILURE;
        }
    };

    // 3. Run the session on stdin/stdout
    let mut storefront = Storefront::new(catalog).with_page(config.start_page);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    match storefront::run(&mut storefront, stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "terminal I/O failed");
            ExitCode::FAILURE
        }
    }
}
