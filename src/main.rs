use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use state_alerts::config;
use state_alerts::{AlertQueryController, NwsClient, TerminalSurface};

#[derive(Debug, Parser)]
#[command(name = "state-alerts")]
#[command(about = "Show active National Weather Service alerts for US state codes")]
struct Args {
    /// Two-letter state codes to query. Reads one code per line from stdin when omitted.
    codes: Vec<String>,

    /// Path to the TOML config file (used only if it exists)
    #[arg(long, default_value = config::CONFIG_PATH)]
    config: PathBuf
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let config = config::load_config_from(&args.config)?;
    let client = NwsClient::new(&config)?;

    let surface = Arc::new(TerminalSurface::new(std::io::stdout()));
    let controller = AlertQueryController::new(client, Arc::clone(&surface));

    if !args.codes.is_empty() {
        for code in &args.codes {
            surface.set_input(code);
            controller.handle_query().await;
        }
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        surface.set_input(&line);
        controller.handle_query().await;
    }

    Ok(())
}
