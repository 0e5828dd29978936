use crate::error::EncodeError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

//===========================================================================//

// Size limits for frames in an ICO file.  The directory stores each side in
// one byte, and the byte value zero is reserved to mean 256, so the largest
// size we can write is 255.
pub(crate) const MIN_SIDE: u32 = 1;
pub(crate) const MAX_SIDE: u32 = 255;

/// The square frame sizes written when the caller doesn't ask for others.
pub const DEFAULT_FRAME_SIZES: &[u32] = &[16, 24, 32, 48, 64, 128, 255];

//===========================================================================//

/// The requested size of one frame in an ICO file.
///
/// A `FrameSpec` can hold any pair of numbers; whether the pair is
/// representable is checked by [`FrameSpec::validate`] (and by the encoder,
/// before any frame is rendered).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct FrameSpec {
    width: u32,
    height: u32,
}

impl FrameSpec {
    /// Creates a frame size with the given width and height, in pixels.
    pub fn new(width: u32, height: u32) -> FrameSpec {
        FrameSpec { width, height }
    }

    /// Creates a square frame size.
    pub fn square(side: u32) -> FrameSpec {
        FrameSpec::new(side, side)
    }

    /// Returns the default list of square frame sizes, smallest first.
    pub fn defaults() -> Vec<FrameSpec> {
        DEFAULT_FRAME_SIZES.iter().map(|&side| FrameSpec::square(side)).collect()
    }

    /// Returns the width of the frame, in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the frame, in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns true if both sides fit in a directory entry.
    pub fn is_valid(&self) -> bool {
        (MIN_SIDE..=MAX_SIDE).contains(&self.width)
            && (MIN_SIDE..=MAX_SIDE).contains(&self.height)
    }

    /// Checks that both sides are between 1 and 255.  `index` is the
    /// position of this size in the caller's request and is only used for
    /// the error.
    pub fn validate(&self, index: usize) -> Result<(), EncodeError> {
        if !self.is_valid() {
            return Err(EncodeError::InvalidDimension {
                index,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl fmt::Display for FrameSpec {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}x{}", self.width, self.height)
    }
}

/// Parses either a single side (`"48"`) or `"WIDTHxHEIGHT"` (`"48x32"`).
impl FromStr for FrameSpec {
    type Err = String;

    fn from_str(string: &str) -> Result<FrameSpec, String> {
        let parse_side = |side: &str| {
            side.trim()
                .parse::<u32>()
                .map_err(|_| format!("Invalid frame size: {:?}", string))
        };
        match string.split_once(|c| c == 'x' || c == 'X') {
            Some((width, height)) => {
                Ok(FrameSpec::new(parse_side(width)?, parse_side(height)?))
            }
            None => Ok(FrameSpec::square(parse_side(string)?)),
        }
    }
}

//===========================================================================//


//===========================================================================//
