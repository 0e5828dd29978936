use crate::framespec::FrameSpec;
use std::io;
use thiserror::Error;

//===========================================================================//

/// An error reported by a resizer or compressor.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while building an ICO file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EncodeError {
    /// No frame sizes were requested.
    #[error("No frame sizes were requested")]
    EmptySpecList,

    /// A requested width or height is outside `1..=255`.
    #[error(
        "Invalid dimensions for frame {index} (was {width}x{height}, \
         but each side must be between 1 and 255)"
    )]
    InvalidDimension {
        /// Position of the offending size in the request.
        index: usize,
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// More frames were requested than the 16-bit count field can hold.
    #[error("Too many frames (was {count}, but max is {})", u16::MAX)]
    TooManyFrames {
        /// Number of frames requested.
        count: usize,
    },

    /// The assembled file would not be addressable with 32-bit offsets.
    #[error("ICO file too large ({size} bytes)")]
    ContainerTooLarge {
        /// Total size the file would have had.
        size: u64,
    },

    /// The source image could not be read or decoded.
    #[error("Source image unreadable: {reason}")]
    SourceUnreadable {
        /// What went wrong.
        reason: String,
    },

    /// The resizer failed for one frame.
    #[error("Failed to resize frame {index} to {spec}: {source}")]
    ResizeFailed {
        /// Position of the frame in the request.
        index: usize,
        /// Size that was being produced.
        spec: FrameSpec,
        /// The resizer's error.
        #[source]
        source: BoxError,
    },

    /// The compressor failed for one frame.
    #[error("Failed to compress frame {index} ({spec}): {source}")]
    CompressFailed {
        /// Position of the frame in the request.
        index: usize,
        /// Size of the frame that was being compressed.
        spec: FrameSpec,
        /// The compressor's error.
        #[source]
        source: BoxError,
    },

    /// Writing the finished file to its destination failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl EncodeError {
    pub(crate) fn unreadable<S: Into<String>>(reason: S) -> EncodeError {
        EncodeError::SourceUnreadable { reason: reason.into() }
    }
}

//===========================================================================//


//===========================================================================//
