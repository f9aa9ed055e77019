//! gRPC service implementation.
//!
//! Each call is stateless: decode, rotate, re-encode, reply. Nothing is
//! retained between requests, so the service needs no interior state and
//! no concurrency control.

use tonic::{Request, Response, Status};
use tracing::{debug, info};

use super::convert::{self, rotation_from_wire};
use super::proto;
use crate::{PKG_VERSION, SpindleError, codec};

/// The image rotation service served by spindled.
#[derive(Debug, Default)]
pub struct SpindleService;

/// Map a [`SpindleError`] onto a gRPC status.
fn to_status(err: SpindleError) -> Status {
    match err {
        SpindleError::InvalidRotation(_) | SpindleError::InvalidInput(_) => {
            Status::invalid_argument(err.to_string())
        }
        SpindleError::UnsupportedImage(_) | SpindleError::Image(_) => {
            Status::invalid_argument(err.to_string())
        }
        other => Status::internal(other.to_string()),
    }
}

#[tonic::async_trait]
impl proto::image_service_server::ImageService for SpindleService {
    async fn rotate_image(
        &self,
        request: Request<proto::RotateRequest>,
    ) -> Result<Response<proto::Image>, Status> {
        let req = request.into_inner();

        let rotation = rotation_from_wire(req.rotation).map_err(to_status)?;
        let image_msg = req
            .image
            .ok_or_else(|| Status::invalid_argument("request carries no image"))?;

        // The reply is re-encoded in whatever format the payload arrived in.
        let format = image::guess_format(&image_msg.data)
            .map_err(|e| Status::invalid_argument(format!("unrecognized image data: {e}")))?;
        let decoded = codec::decode(&image_msg.data).map_err(to_status)?;

        debug!(
            width = decoded.width(),
            height = decoded.height(),
            ?format,
            "decoded request image"
        );

        let rotated = codec::apply_rotation(decoded, rotation);
        let reply = convert::image_to_proto(&rotated, format).map_err(to_status)?;

        info!(
            %rotation,
            width = reply.width,
            height = reply.height,
            "rotated image"
        );

        Ok(Response::new(reply))
    }

    async fn health(
        &self,
        _request: Request<proto::HealthRequest>,
    ) -> Result<Response<proto::HealthResponse>, Status> {
        Ok(Response::new(proto::HealthResponse {
            healthy: true,
            version: PKG_VERSION.to_string(),
        }))
    }
}
