//! Research Radar server
//!
//! This is the main entry point for the application.

use anyhow::{bail, Result};
use research_radar::{
    config,
    network::HttpClient,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = match parse_args(std::env::args().skip(1))? {
        Command::Run { config } => config,
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Version => {
            println!("research-radar {}", research_radar::VERSION);
            return Ok(());
        }
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Starting Research Radar v{}", research_radar::VERSION);

    // Load configuration
    let settings = config::load(config_path.as_deref())?;
    info!("Loaded configuration for instance: {}", settings.general.instance_name);

    if settings.api_key().is_none() {
        warn!(
            "{} is not set; every search will fail until it is configured",
            config::API_KEY_ENV
        );
    }

    // Initialize HTTP client
    let client = HttpClient::with_settings(&settings.outgoing)?;
    info!("HTTP client initialized for {}", settings.provider.base_url);

    // Bind address
    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    // Create application state and router
    let app = create_router(AppState::new(settings, client));

    info!("Starting server on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// What the command line asked for
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run { config: Option<PathBuf> },
    Help,
    Version,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Command> {
    let mut config = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "-c" | "--config" => match args.next() {
                Some(path) => config = Some(PathBuf::from(path)),
                None => bail!("{} requires a file path", arg),
            },
            other => bail!("unrecognized argument: {}", other),
        }
    }
    Ok(Command::Run { config })
}

/// Print usage information
fn print_usage() {
    println!(
        r#"
Research Radar v{}
Category fan-out research search over the Exa API

USAGE:
    research-radar [OPTIONS]

OPTIONS:
    -c, --config <FILE>    Path to configuration file
    -h, --help             Print help information
    -V, --version          Print version information

ENVIRONMENT VARIABLES:
    EXA_API_KEY            Search provider API key (required)
    RADAR_SETTINGS_PATH    Path to settings.yml
    RADAR_PORT             Server port
    RADAR_BIND_ADDRESS     Bind address
    RADAR_PROVIDER_URL     Provider API root
    RUST_LOG               Log filter (default: info)
"#,
        research_radar::VERSION
    );
}
