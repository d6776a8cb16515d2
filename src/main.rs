//! Vaultsync - compare and promote secrets across environments.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vaultsync::cli::output;
use vaultsync::cli::{execute, Cli};
use vaultsync::error::{ConfigError, Error};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("VAULTSYNC_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("vaultsync=debug")
        } else {
            EnvFilter::new("vaultsync=warn")
        }
    });

    let registry = tracing_subscriber::registry().with(filter);
    if cli.log_json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    if let Err(e) = execute(cli.command, cli.config).await {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::Config(ConfigError::NotInitialized) => Some("run: vaultsync init"),
            Error::Config(ConfigError::AlreadyInitialized(_)) => Some("use --force to overwrite"),
            Error::UnknownEnvironment(_) => Some("run: vaultsync envs"),
            Error::InvalidSelection(_) => {
                Some("only secrets present in the source can be copied; run: vaultsync compare")
            }
            Error::NothingToEdit => Some("check the source environment is reachable"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
