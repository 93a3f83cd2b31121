//! HFT Engine - Binary Entry Point
//!
//! Submits a single order through the engine and reports the result.
//!
//! ```text
//! hft-engine [SYMBOL] [PRICE] [QUANTITY] [--env-file PATH]
//! ```
//!
//! Defaults to `AAPL 172.35 100`. Latency and logging come from
//! `HFT_ENGINE_LATENCY_US` and `HFT_ENGINE_LOG_ACKS`, read from the process
//! environment and `.env` (or the file given with `--env-file`).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use hft_engine::types::price::format_notional;
use hft_engine::{telemetry, Engine, EngineConfig, OrderRequest};

/// Submit one simulated order
#[derive(Parser, Debug)]
#[command(name = "hft-engine", version, about)]
struct Args {
    /// Instrument symbol
    #[arg(default_value = "AAPL")]
    symbol: String,

    /// Limit price, any value
    #[arg(default_value_t = 172.35, allow_negative_numbers = true)]
    price: f64,

    /// Quantity, any value
    #[arg(default_value_t = 100, allow_negative_numbers = true)]
    quantity: i32,

    /// Read configuration from this file instead of `.env`
    #[arg(long)]
    env_file: Option<PathBuf>,
}

impl Args {
    fn order(&self) -> OrderRequest {
        OrderRequest::new(self.symbol.as_str(), self.price, self.quantity)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    telemetry::init();

    let loaded = match &args.env_file {
        Some(path) => EngineConfig::from_env_file(path),
        None => EngineConfig::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let engine = Engine::from_config(&config);
    info!("Engine status code: {}", engine.init().code());

    let ack = engine.send_order(&args.order());

    println!("Acknowledgement:");
    println!("  Symbol:   {}", ack.symbol());
    println!("  Price:    {}", ack.price());
    println!("  Quantity: {}", ack.quantity());
    println!("  Notional: {}", format_notional(ack.price(), ack.quantity()));
    println!("  Latency:  {:.2?} (floor {:?})", ack.latency(), config.latency);

    ExitCode::SUCCESS
}
