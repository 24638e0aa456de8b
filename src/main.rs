//! Trace Context Bridge (v1)
//!
//! Bridges the gateway's legacy correlation ID with W3C Trace Context.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request                ┌──────────────────────────────────────────┐
//!     ──────────────────────────────┼─▶ assign transaction ID (legacy)         │
//!                                   │        │                                 │
//!                                   │        ▼                                 │
//!                                   │   inbound processor ──▶ variable store   │
//!                                   │        │                     │           │
//!                                   │        ▼                     │           │
//!                                   │   business logic             │           │
//!                                   │        │                     │           │
//!                                   │        ▼                     ▼           │
//!     Client Response               │   outbound processor ◀── trace record    │
//!     ◀─────────────────────────────┼──      (X-Trace-Id, X-Correlation-ID)    │
//!                                   └──────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use trace_bridge::config::{load_config, BridgeConfig};
use trace_bridge::observability::logging;
use trace_bridge::observability::metrics::init_metrics;
use trace_bridge::HttpServer;

#[derive(Parser)]
#[command(name = "trace-bridge")]
#[command(about = "W3C Trace Context bridge for legacy correlation IDs", long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => BridgeConfig::default(),
    };

    logging::init_logging(&config.observability);

    tracing::info!("trace-bridge v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        default_trace_flags = %config.trace.default_trace_flags,
        verbose_logging = config.trace.verbose_logging,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
