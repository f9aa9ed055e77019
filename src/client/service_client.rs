//! [`ServiceClient`] — typed wrapper around the generated gRPC client.
//!
//! Proto ↔ native conversions are centralized in [`crate::server::convert`].
//! Transport and server-side failures come back as typed [`SpindleError`]
//! values so callers can distinguish a rejected argument from a dead server;
//! nothing is swallowed or logged away here.

use tonic::transport::Channel;

use crate::server::convert;
use crate::server::proto;
use crate::server::proto::image_service_client::ImageServiceClient;
use crate::{Result, Rotation, SourceImage, SpindleError};

/// A client for a remote spindled server.
pub struct ServiceClient {
    inner: ImageServiceClient<Channel>,
}

impl ServiceClient {
    /// Connect to a spindled server at the given address.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let client = ServiceClient::connect("http://localhost:8080").await?;
    /// ```
    pub async fn connect(addr: impl Into<String>) -> Result<Self> {
        let addr = addr.into();
        let inner = ImageServiceClient::connect(addr.clone())
            .await
            .map_err(|e| SpindleError::Transport(format!("failed to connect to {addr}: {e}")))?;
        Ok(Self { inner })
    }

    /// Request a rotation of `source` and return the server's reply image.
    ///
    /// The source raster is re-encoded in its detected format for transport.
    pub async fn rotate_image(
        &mut self,
        source: &SourceImage,
        rotation: Rotation,
    ) -> Result<proto::Image> {
        let image = convert::image_to_proto(&source.image, source.format)?;
        let request = proto::RotateRequest {
            rotation: proto::Rotation::from(rotation).into(),
            image: Some(image),
        };
        let response = self
            .inner
            .rotate_image(request)
            .await
            .map_err(from_status)?;
        Ok(response.into_inner())
    }

    /// Check service health; returns `(healthy, server_version)`.
    pub async fn health(&mut self) -> Result<(bool, String)> {
        let response = self
            .inner
            .health(proto::HealthRequest {})
            .await
            .map_err(from_status)?
            .into_inner();
        Ok((response.healthy, response.version))
    }
}

/// Convert [`tonic::Status`] to [`SpindleError`].
fn from_status(status: tonic::Status) -> SpindleError {
    match status.code() {
        tonic::Code::InvalidArgument => SpindleError::InvalidInput(status.message().to_string()),
        _ => SpindleError::Transport(status.message().to_string()),
    }
}
