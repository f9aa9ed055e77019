//! Conversions between spindle native types and protobuf types.
//!
//! The wire enum is permissive (any `i32` fits in the field), so incoming
//! rotation values go through [`rotation_from_wire`], which rejects unknown
//! enumerants as invalid arguments instead of defaulting them.

use image::DynamicImage;

use super::proto;
use crate::{Result, Rotation, SpindleError, codec};

impl From<Rotation> for proto::Rotation {
    fn from(r: Rotation) -> Self {
        match r {
            Rotation::None => proto::Rotation::None,
            Rotation::Ninety => proto::Rotation::NinetyDeg,
            Rotation::OneEighty => proto::Rotation::OneEightyDeg,
            Rotation::TwoSeventy => proto::Rotation::TwoSeventyDeg,
        }
    }
}

impl From<proto::Rotation> for Rotation {
    fn from(p: proto::Rotation) -> Self {
        match p {
            proto::Rotation::None => Rotation::None,
            proto::Rotation::NinetyDeg => Rotation::Ninety,
            proto::Rotation::OneEightyDeg => Rotation::OneEighty,
            proto::Rotation::TwoSeventyDeg => Rotation::TwoSeventy,
        }
    }
}

/// Decode a raw wire rotation value.
pub fn rotation_from_wire(value: i32) -> Result<Rotation> {
    proto::Rotation::try_from(value)
        .map(Into::into)
        .map_err(|_| SpindleError::InvalidRotation(format!("unknown rotation enum value {value}")))
}

/// Build a wire image message from a decoded raster.
///
/// Re-encodes the raster in `format`; width, height and the grayscale flag
/// are taken from the raster itself.
pub fn image_to_proto(image: &DynamicImage, format: image::ImageFormat) -> Result<proto::Image> {
    let data = codec::encode(image, format)?;
    Ok(proto::Image {
        grayscale: codec::is_grayscale(image),
        width: image.width() as i32,
        height: image.height() as i32,
        data,
    })
}
