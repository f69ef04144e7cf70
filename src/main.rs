//! Route table inspector.
//!
//! Loads a routes file, registers every controller, seals the table and
//! prints the resulting names.
//!
//! ```text
//! routes.toml → load_config → ControllerCollection → flush → RouteTable → stdout
//! ```

use std::path::PathBuf;

use clap::Parser;

use controller_routes::config::{load_config, validate_log_level};
use controller_routes::observability::init_logging;
use controller_routes::routing::{render_text, ControllerCollection};

#[derive(Parser)]
#[command(name = "controller-routes")]
#[command(about = "Print the sealed route table of a routes file", long_about = None)]
struct Cli {
    /// Routes file to load.
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    /// Print JSON instead of aligned columns.
    #[arg(long)]
    json: bool,

    /// Override the configured log level.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_config(&cli.config)?;
    if let Some(level) = cli.log_level {
        validate_log_level(&level)?;
        config.observability.log_level = level;
    }

    init_logging(&config.observability)?;

    tracing::info!(
        path = %cli.config.display(),
        routes = config.routes.len(),
        "Configuration loaded"
    );

    let mut collection = ControllerCollection::from_config(&config);
    let table = collection.flush();
    let summaries = table.summaries();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        print!("{}", render_text(&summaries));
    }

    Ok(())
}
