//! Rotation request tokens.

use std::fmt;

use crate::{Result, SpindleError};

/// A validated quarter-turn rotation request.
///
/// Only 0, 90, 180 and 270 degrees exist on the wire; everything else is
/// rejected before a request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    None,
    Ninety,
    OneEighty,
    TwoSeventy,
}

impl Rotation {
    /// Parse a CLI rotation argument.
    ///
    /// Accepts exactly the strings `"0"`, `"90"`, `"180"` and `"270"`.
    /// Any other integer, and any non-numeric input, fails with
    /// [`SpindleError::InvalidRotation`].
    pub fn from_degrees(arg: &str) -> Result<Self> {
        let degrees: u32 = arg
            .parse()
            .map_err(|_| SpindleError::InvalidRotation(format!("not a number: {arg:?}")))?;
        match degrees {
            0 => Ok(Rotation::None),
            90 => Ok(Rotation::Ninety),
            180 => Ok(Rotation::OneEighty),
            270 => Ok(Rotation::TwoSeventy),
            other => Err(SpindleError::InvalidRotation(format!(
                "{other} is not one of 0, 90, 180, 270"
            ))),
        }
    }

    /// The rotation amount in degrees.
    pub fn degrees(self) -> u32 {
        match self {
            Rotation::None => 0,
            Rotation::Ninety => 90,
            Rotation::OneEighty => 180,
            Rotation::TwoSeventy => 270,
        }
    }

    /// Whether this rotation swaps image width and height.
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Rotation::Ninety | Rotation::TwoSeventy)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}
