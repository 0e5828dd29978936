//! A library for building multi-resolution ICO files from a single image.
//!
//! The source image is resized to each requested frame size, every frame is
//! compressed as an RGBA PNG, and the frames are packed into one ICO file
//! behind a directory of sizes and offsets.
//!
//! ```no_run
//! use icopack::{IconEncoder, SourceImage};
//!
//! # fn main() -> Result<(), icopack::EncodeError> {
//! let source = SourceImage::open("logo.png")?;
//! let icon = IconEncoder::new().encode_defaults(&source)?;
//! icon.save("logo.ico")?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

#[macro_use]
mod macros;

mod compress;
mod encoder;
mod error;
mod framespec;
mod icondir;
mod image;
mod resize;
mod source;

pub use crate::compress::{Compressor, PngCompressor};
pub use crate::encoder::IconEncoder;
pub use crate::error::{BoxError, EncodeError};
pub use crate::framespec::{FrameSpec, DEFAULT_FRAME_SIZES};
pub use crate::icondir::{ContainerFile, DirectoryEntry};
pub use crate::image::IconImage;
pub use crate::resize::{ImageResizer, Resizer};
pub use crate::source::{ColorMode, SourceImage};

// Re-exported so that callers can pick a filter or compression level without
// depending on these crates directly.
pub use ::image::imageops::FilterType;
pub use png::Compression;
