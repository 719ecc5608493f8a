//! Suburb Search - Entry Point

use clap::Parser;
use std::path::PathBuf;
use suburb_search::model::{AppError, CandidateSet};
use suburb_search::state::{AppState, Timings};
use suburb_search::view::{ColorConfig, Styles};
use tracing::info;

/// Suburb Search - find a Sydney suburb with keyboard-driven autocomplete
#[derive(Parser, Debug)]
#[command(name = "suburb-search")]
#[command(version)]
#[command(about = "Terminal suburb search with keyboard-driven autocomplete")]
pub struct Args {
    /// Newline-delimited candidate file (defaults to built-in Sydney suburbs)
    #[arg(long)]
    pub candidates: Option<PathBuf>,

    /// Pre-fill the suburb field
    #[arg(short, long)]
    pub query: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = suburb_search::config::load_config_with_precedence(args.config.clone())?;
        let merged = suburb_search::config::merge_config(config_file);
        let with_env = suburb_search::config::apply_env_overrides(merged);
        suburb_search::config::apply_cli_overrides(with_env, args.candidates.clone())
    };

    let _log_guard = suburb_search::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let candidates = match &config.candidates_file {
        Some(path) => CandidateSet::load(path)?,
        None => CandidateSet::sydney(),
    };

    let timings = Timings {
        notification_timeout: config.notification_timeout(),
        search_delay: config.search_delay(),
    };
    let mut app_state = AppState::new(candidates, timings);
    if let Some(query) = &args.query {
        app_state.set_query(query);
    }

    let styles = Styles::new(ColorConfig::from_env_and_args(args.no_color));
    suburb_search::view::run(app_state, styles)?;

    Ok(())
}
