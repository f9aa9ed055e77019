//! Spindle - gRPC image rotation service
//!
//! A small unary RPC pair: the `spindle` client reads an image file, asks a
//! `spindled` server to rotate it by a quarter turn, and writes the result
//! next to the original under a derived name that never collides with it.
//!
//! # Client Example
//!
//! ```rust,no_run
//! use spindle::client::ServiceClient;
//! use spindle::{Rotation, codec, naming};
//!
//! #[tokio::main]
//! async fn main() -> spindle::Result<()> {
//!     let source = codec::read_image("photo.jpg".as_ref())?;
//!     let rotation = Rotation::from_degrees("90")?;
//!
//!     let mut client = ServiceClient::connect("http://localhost:8080").await?;
//!     let reply = client.rotate_image(&source, rotation).await?;
//!
//!     let rotated = codec::decode(&reply.data)?;
//!     let output = naming::new_output_name(&source.path, &source.format_token());
//!     rotated.save_with_format(&output, source.format)?;
//!     Ok(())
//! }
//! ```

pub mod codec;
pub mod error;
pub mod naming;
pub mod rotation;
mod version;

#[cfg(feature = "client")]
pub mod client;
#[cfg(any(feature = "server", feature = "client"))]
pub mod server;

// Re-export main types at crate root
pub use codec::SourceImage;
pub use error::{Result, SpindleError};
pub use rotation::Rotation;
pub use version::PKG_VERSION;
