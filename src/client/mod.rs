//! Client library for connecting to spindled.
//!
//! Provides [`ServiceClient`], which forwards rotation requests to a remote
//! spindled instance over gRPC.

mod service_client;

pub use service_client::ServiceClient;
