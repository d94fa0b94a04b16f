//! epochline - Entry Point

use clap::Parser;
use epochline::model::Era;
use epochline::view::{ColorConfig, Palette, StartupOptions};
use std::path::PathBuf;
use tracing::info;

/// epochline - browse world history on a zoomable terminal timeline
#[derive(Parser, Debug)]
#[command(name = "epochline")]
#[command(version)]
#[command(about = "Terminal timeline of historical events with a zoomable overview")]
pub struct Args {
    /// Path to a JSON dataset (uses the bundled dataset if not provided)
    pub dataset: Option<PathBuf>,

    /// Start with search query active
    #[arg(short, long)]
    pub search: Option<String>,

    /// Show only this era (repeatable), e.g. --era "Classical Antiquity"
    #[arg(short, long = "era", value_parser = parse_era)]
    pub eras: Vec<Era>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_era(label: &str) -> Result<Era, String> {
    Era::from_label(label).ok_or_else(|| {
        let known: Vec<&str> = Era::ALL.iter().map(|era| era.short_label()).collect();
        format!("unknown era '{label}' (expected one of: {})", known.join(", "))
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = epochline::config::load_config_with_precedence(args.config.clone())?;
        let merged = epochline::config::merge_config(config_file);
        let with_env = epochline::config::apply_env_overrides(merged);

        // Flags only override when explicitly set
        let no_color_override = args.no_color.then_some(true);
        epochline::config::apply_cli_overrides(with_env, args.dataset.clone(), no_color_override)
    };

    // The TUI owns the terminal, so a logging failure is reported and skipped
    if let Err(err) = epochline::logging::init(&config.log_file_path) {
        eprintln!("epochline: logging disabled: {err}");
    }

    info!(config = ?config, "Configuration loaded and resolved");

    let bounds = config.bounds()?;
    let source = epochline::source::detect_dataset_source(config.dataset.clone());
    let dataset = source.load(bounds)?;

    let state = epochline::state::AppState::new(dataset, config.navigator)?;

    let options = StartupOptions {
        search: args.search,
        eras: args.eras,
    };
    let palette = Palette::new(ColorConfig::from_env_and_args(config.no_color));

    epochline::view::run_app(state, options, palette)?;

    Ok(())
}
