use std::io::{IsTerminal, stdout};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;
use sysnap::app::{self, RunSettings};
use sysnap::config::{Config, ConfigWarning, load_config, load_config_from_path};
use sysnap::logging;
use sysnap::system::collector::Collector;

#[derive(Parser)]
#[command(
    name = "sysnap",
    version,
    about = "Print CPU, memory, disk, host and network information and save it as JSON"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the JSON snapshot
    #[arg(long)]
    output: Option<PathBuf>,

    /// Mount point to report disk usage for
    #[arg(long)]
    disk_path: Option<PathBuf>,

    /// Color output: auto, always, never
    #[arg(long)]
    color: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let (config, warning) = load_config_for_cli(&cli);
    logging::init(logging::resolve_level(
        &config.general.log_level,
        cli.verbose,
    ))?;
    if let Some(warning) = warning {
        tracing::warn!(
            path = %warning.path.display(),
            reason = %warning.reason,
            "ignoring malformed config"
        );
    }

    let color = config.display.color_choice().enabled(stdout().is_terminal());
    let settings = RunSettings::from_config(&config, color);

    let mut collector = Collector::new();
    let mut out = stdout().lock();
    if let Err(err) = app::run(&settings, &mut collector, &mut out) {
        match err.category() {
            Some(category) => tracing::error!(%category, "collection failed: {err}"),
            None => tracing::error!("{err}"),
        }
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

fn load_config_for_cli(cli: &Cli) -> (Config, Option<ConfigWarning>) {
    let (mut config, warning) = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(ref path) = cli.output {
        config.general.output_path = path.clone();
    }
    if let Some(ref path) = cli.disk_path {
        config.general.disk_path = path.clone();
    }
    if let Some(ref color) = cli.color {
        config.display.color = color.clone();
    }

    (config, warning)
}
