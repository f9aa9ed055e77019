//! spindle — CLI client for spindled.
//!
//! Reads an image file, requests a rotation from the server, and writes
//! the result next to the original under a non-colliding derived name.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use spindle::client::ServiceClient;
use spindle::{Rotation, codec, naming};

/// Spindle CLI client
#[derive(Parser)]
#[command(name = "spindle")]
#[command(version = spindle::PKG_VERSION)]
#[command(about = "Rotate an image via a spindled server")]
struct Args {
    /// Image file path
    #[arg(short, long)]
    image: PathBuf,

    /// Rotation in degrees: 0, 90, 180 or 270
    #[arg(short, long)]
    rotation: String,

    /// Server host (-h is taken by --help)
    #[arg(short = 'H', long, env = "SPINDLE_HOST", default_value = "localhost")]
    host: String,

    /// Server port
    #[arg(short, long, env = "SPINDLE_PORT", default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    match run(args).await {
        Ok(output) => {
            println!("wrote {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "rotation request failed");
            eprintln!("spindle: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Read, rotate remotely, write. Local failures (unreadable file, bad
/// rotation token) abort before any network traffic.
async fn run(args: Args) -> spindle::Result<PathBuf> {
    let source = codec::read_image(&args.image)?;
    let rotation = Rotation::from_degrees(&args.rotation)?;

    let address = format!("http://{}:{}", args.host, args.port);
    let mut client = ServiceClient::connect(&address).await?;
    let reply = client.rotate_image(&source, rotation).await?;

    let rotated = codec::decode(&reply.data)?;
    let output = naming::new_output_name(&source.path, &source.format_token());
    rotated.save_with_format(&output, source.format)?;

    Ok(output)
}
