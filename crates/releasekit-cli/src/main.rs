// SPDX-License-Identifier: GPL-3.0-or-later
use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use releasekit_application::AppState;
use releasekit_config::load as load_config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

/// Release submission QC toolkit
#[derive(Parser, Debug)]
#[command(name = "releasekit", author, version, about, long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true, env = "RELEASEKIT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run QC over a submission document
    Validate {
        file: PathBuf,
        /// Reference date for release-notice checks (defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Skip checks that depend on the current date
        #[arg(long, conflicts_with = "today")]
        no_date_checks: bool,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a single field value
    Field {
        /// Field name, e.g. trackTitle, artistName, composer, isrc
        kind: String,
        value: String,
        /// Title language (code or name), e.g. fr, de, swedish
        #[arg(long)]
        language: Option<String>,
    },
    /// Show the effective territories per DSP
    Territories {
        file: PathBuf,
        /// DSP ids; defaults to the release's platforms
        #[arg(long = "dsp")]
        dsps: Vec<String>,
        /// Remove countries the DSP does not serve
        #[arg(long)]
        available: bool,
    },
    /// Show the release moment in UTC and the display timezones
    ReleaseTime { file: PathBuf },
    /// Submit a release to the configured endpoint
    Submit {
        file: PathBuf,
        /// Confirm acceptance of the distribution terms
        #[arg(long)]
        accept_terms: bool,
    },
    /// Inspect audio files before upload
    Probe {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_tracing(&config.telemetry.log_level);
    let state = AppState::new(config);
    state.on_start();

    match cli.command {
        Command::Validate {
            file,
            today,
            no_date_checks,
            json,
        } => {
            let reference = if no_date_checks {
                None
            } else {
                Some(today.unwrap_or_else(|| chrono::Local::now().date_naive()))
            };
            commands::validate(&state, &file, reference, json)
        }
        Command::Field {
            kind,
            value,
            language,
        } => commands::field(&kind, &value, language.as_deref()),
        Command::Territories {
            file,
            dsps,
            available,
        } => commands::territories(&file, &dsps, available),
        Command::ReleaseTime { file } => commands::release_time(&state, &file),
        Command::Submit { file, accept_terms } => {
            commands::submit(&state, &file, accept_terms).await
        }
        Command::Probe { files } => commands::probe(&state, &files).await,
    }
}

fn init_tracing(default_level: &str) {
    let fmt_layer = fmt::layer().with_target(true).with_level(true);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
