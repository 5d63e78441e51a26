//! distgit-jobs CLI
//!
//! Runs either the pull-request event crawler or the maintainer mailer.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use distgit_jobs::{
    error::Result,
    models::Config,
    pipeline,
    services::{AliasDirectoryClient, DatagrepperClient},
    storage::LocalStorage,
    utils::{self, http},
};

/// distgit-jobs - Fedora distgit batch jobs
#[derive(Parser, Debug)]
#[command(
    name = "distgit-jobs",
    version,
    about = "Fedora distgit pull-request crawler and maintainer mailer"
)]

struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Get Fedora distgit PR events
    Events {
        /// Since N days
        #[arg(long)]
        since_days: Option<u64>,

        /// Output JSON file (default: events.output_file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Spool one email per maintainer of newly added distgits
    Mailer {
        /// Spool directory receiving one YAML file per maintainer
        #[arg(long)]
        output_dir: PathBuf,

        /// Newline-delimited distgit list (default: mailer.input_file)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Validate configuration file
    Validate,
}

/// Initialize logging from the configured level or the verbosity flag.
fn init_logging(level: &str, verbose: bool) {
    let level = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let loaded = Config::load(&cli.config);
    let config = loaded.as_ref().cloned().unwrap_or_default();
    init_logging(&config.logging.level, cli.verbose);

    if let Err(e) = &loaded {
        log::warn!(
            "Config load failed from {}: {}. Using defaults.",
            cli.config.display(),
            e
        );
    }

    match cli.command {
        Command::Events { since_days, output } => {
            config.validate()?;
            let output = output.unwrap_or_else(|| PathBuf::from(&config.events.output_file));
            let (dir, file_name) = utils::split_output_path(&output)?;

            let client = http::create_client(&config.http)?;
            let source = DatagrepperClient::new(client, &config.events.base_url);
            let storage = LocalStorage::new(dir).with_pretty_json(config.events.pretty);

            pipeline::run_events(
                &config.events,
                &source,
                &storage,
                &file_name,
                utils::days_to_seconds(since_days),
            )
            .await?;
        }

        Command::Mailer { output_dir, input } => {
            config.validate()?;
            let input = input.unwrap_or_else(|| PathBuf::from(&config.mailer.input_file));

            let client = http::create_client(&config.http)?;
            let aliases = AliasDirectoryClient::new(client, &config.mailer.alias_url);
            let storage = LocalStorage::new(output_dir);

            pipeline::run_mailer(&config.mailer, &aliases, &storage, &input).await?;
        }

        Command::Validate => {
            log::info!("Validating configuration {}...", cli.config.display());

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
        }
    }

    log::info!("Done!");

    Ok(())
}
