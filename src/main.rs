//! User Directory - browse randomly generated user profiles in the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{info, warn};
use userdir_app::config::{self, Settings, SettingsOverrides};
use userdir_app::StartupOptions;
use userdir_core::Gender;
use userdir_source::HttpRecordSource;

/// User Directory - browse randomly generated user profiles
#[derive(Parser, Debug)]
#[command(name = "userdir")]
#[command(about = "Browse randomly generated user profiles in the terminal", long_about = None)]
struct Args {
    /// Seed for a reproducible batch of users
    #[arg(long)]
    seed: Option<String>,

    /// Number of users fetched per request
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    results: Option<u32>,

    /// Start with the gender filter set (male or female)
    #[arg(long)]
    gender: Option<Gender>,

    /// Open a profile directly by UUID
    #[arg(long, value_name = "UUID")]
    profile: Option<String>,

    /// Directory holding config.toml
    #[arg(long, value_name = "PATH")]
    config_dir: Option<PathBuf>,
}

/// Load the settings file, creating a commented default on first run
fn load_settings(config_dir: Option<PathBuf>) -> Settings {
    let Some(dir) = config_dir.or_else(config::default_config_dir) else {
        warn!("No configuration directory available, using defaults");
        return Settings::default();
    };

    if let Err(e) = config::init_config_dir(&dir) {
        warn!("Could not initialize {}: {}", dir.display(), e);
    }
    config::load_settings(&dir)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    userdir_core::logging::init().wrap_err("failed to initialize logging")?;

    let mut settings = load_settings(args.config_dir);
    settings.apply_overrides(&SettingsOverrides {
        seed: args.seed,
        results: args.results,
    });
    info!(
        "Source: {} (results={}, seed={:?})",
        settings.source.base_url, settings.source.results, settings.source.seed
    );

    let source = HttpRecordSource::new(settings.source.base_url()?, settings.source.timeout())
        .wrap_err("failed to create the record source")?;

    let options = StartupOptions {
        gender: args.gender,
        profile: args.profile,
    };

    userdir_tui::run(settings, options, source).await?;
    Ok(())
}
