//! CEP weather orchestration entry point.

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cep_weather::config::{FrontConfig, WeatherConfig};
use cep_weather::front::{self, FrontState};
use cep_weather::metrics;
use cep_weather::utils::shutdown_signal;
use cep_weather::weather::{self, WeatherState};

/// Two-hop CEP to weather lookup services.
#[derive(Parser, Debug)]
#[command(name = "cep-weather")]
#[command(about = "CEP lookup front service and weather orchestration service")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the front service (validates CEPs and forwards them).
    Front {
        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run the weather orchestration service.
    Weather {
        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity for both services.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("cep_weather=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Initialize metrics
    metrics::init_metrics();

    match args.command {
        Command::Front { port } => cmd_front(port).await,
        Command::Weather { port } => cmd_weather(port).await,
        Command::CheckConfig => cmd_check_config(),
    }
}

/// Run the front service.
async fn cmd_front(port_override: Option<u16>) -> anyhow::Result<()> {
    info!("Loading front configuration...");
    let mut config = FrontConfig::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    if let Some(port) = port_override {
        config.port = port;
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    info!("Forwarding lookups to {}", config.service_b_url);

    let state = FrontState::new(&config);
    let router = front::create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("front service listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("front service stopped");
    Ok(())
}

/// Run the weather orchestration service.
async fn cmd_weather(port_override: Option<u16>) -> anyhow::Result<()> {
    info!("Loading weather configuration...");
    let mut config = WeatherConfig::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    if let Some(port) = port_override {
        config.port = port;
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    if !config.has_api_key() {
        // Lookups will answer 500 until WEATHER_API_KEY is supplied.
        error!("WEATHER_API_KEY is not set; climate lookups will fail");
    }

    let state = WeatherState::new(&config);
    let router = weather::create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("weather service listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("weather service stopped");
    Ok(())
}

/// Check configuration validity for both services.
fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("CEP WEATHER - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading front configuration... ");
    let front = match FrontConfig::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Front configuration load failed"));
        }
    };

    print!("Validating front configuration... ");
    match front.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Front configuration validation failed"));
        }
    }

    print!("Loading weather configuration... ");
    let weather = match WeatherConfig::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Weather configuration load failed"));
        }
    };

    print!("Validating weather configuration... ");
    match weather.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Weather configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Front port: {}", front.port);
    println!("  Downstream URL: {}", front.service_b_url);
    println!("  Weather port: {}", weather.port);
    println!("  ViaCEP base URL: {}", weather.viacep_base_url);
    println!("  WeatherAPI base URL: {}", weather.weather_api_url);
    println!(
        "  WeatherAPI key: {}",
        if weather.has_api_key() { "set" } else { "MISSING" }
    );
    println!("  HTTP timeout: {}s", weather.http_timeout_secs);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}
