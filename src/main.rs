// Diagnostic CLI for the documentation cache.
// Resolves one CSS property name and prints its record.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use wpdocs::{DocSyncService, SyncConfig};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let Some(name) = std::env::args().nth(1) else {
        eprintln!("usage: wpdocs <css-property>");
        return ExitCode::from(2);
    };

    let config = match SyncConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    let service = match DocSyncService::new(config) {
        Ok(service) => service,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match service.lookup(&name).await {
        Some(record) => {
            println!("{}", record.name);
            println!("{}", record.summary);
            if !record.values.is_empty() {
                println!();
                println!("Values:");
                for value in &record.values {
                    println!("  {}: {}", value.title, value.description);
                }
            }
            println!();
            println!("More info: {}", record.url);
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("no documentation found for '{name}'");
            ExitCode::FAILURE
        }
    }
}
