//! spindled — Spindle daemon.
//!
//! Serves the image rotation service over gRPC.

use std::net::SocketAddr;

use clap::Parser;
use tonic::transport::Server;
use tracing::info;

use spindle::server::SpindleService;
use spindle::server::config::Config;
use spindle::server::proto::image_service_server::ImageServiceServer;

/// Spindle daemon — image rotation service.
#[derive(Parser)]
#[command(name = "spindled")]
#[command(version = spindle::PKG_VERSION)]
#[command(about = "Spindle image rotation daemon")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: info for the daemon; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?;

    let addr: SocketAddr = config
        .server
        .address
        .parse()
        .map_err(|e| spindle::SpindleError::Configuration(format!("Invalid address: {e}")))?;

    info!(version = spindle::PKG_VERSION, %addr, "spindled starting");

    let service = SpindleService::default();
    let server = ImageServiceServer::new(service);

    Server::builder()
        .add_service(server)
        .serve_with_shutdown(addr, async {
            let _ = tokio::signal::ctrl_c().await;
            info!("spindled shutting down");
        })
        .await?;

    Ok(())
}
