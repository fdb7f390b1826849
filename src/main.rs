mod cli;
mod config;
mod error;
mod notification;
mod payload;
mod request;

use clap::{CommandFactory, Parser};
use cli::Cli;
use colored::Colorize;
use config::{Config, DEFAULT_CONFIG_PATH};
use error::Error;
use notification::Notifier;
use request::NotificationRequest;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.help {
        let mut command = Cli::command();
        eprintln!("{}", command.render_help());
        eprintln!("Default configuration file is '{}'", DEFAULT_CONFIG_PATH);
        process::exit(1);
    }

    init_tracing(cli.verbose);

    if let Err(e) = run(&cli).await {
        eprintln!("{} {}", "error:".red().bold(), e);
        process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), Error> {
    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    if cli.verbose {
        println!("{}", format!("Reading configuration file '{}'", config_path.display()).bold());
        println!("{}", "-".repeat(50));
    }

    let config = Config::load(&config_path)?;
    let request = NotificationRequest::resolve(config, cli)?;

    let notifier = Notifier::new();
    tracing::debug!(endpoint = notifier.endpoint(), "dispatching notification");
    notifier.notify(&request).await?;

    if cli.verbose {
        println!("{}", "Notification delivered".green().bold());
    }

    Ok(())
}

/// Verbose trace goes to stdout, everything else to stderr. `RUST_LOG` wins
/// over `-v`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "warn,fcm_submit=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if verbose {
        builder.with_writer(std::io::stdout).init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
}
