//! teller - retail bank command loop
//!
//! Single-session teller over stdin/stdout. All data lives in memory and is
//! discarded on exit.

use std::io;

use teller::handlers::BankHandler;
use teller::repl::Session;
use teller::{Config, LogFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging on stderr, keeping stdout for the menu
fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "teller=warn".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init(),
    }
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(config.log_format);

    tracing::info!(
        withdrawal_limit = %config.withdrawal_limit,
        max_withdrawals = config.max_withdrawals,
        "Starting teller"
    );

    let handler = BankHandler::new(config.checking_policy());
    let stdin = io::stdin();
    let mut session = Session::new(handler, stdin.lock(), io::stdout());
    session.run()?;

    tracing::info!("All data discarded. Goodbye!");
    Ok(())
}
