use crate::framespec::{FrameSpec, MAX_SIDE, MIN_SIDE};
use std::io::{self, Write};

//===========================================================================//

/// One resized frame, ready to be compressed.
#[derive(Clone)]
pub struct IconImage {
    width: u32,
    height: u32,
    rgba_data: Vec<u8>,
}

impl IconImage {
    /// Creates a new frame with the given dimensions and RGBA data.  Both
    /// sides must be between 1 and 255, and `rgba_data` must have `4 * width
    /// * height` bytes and be in row-major order from top to bottom.
    pub fn from_rgba_data(
        width: u32,
        height: u32,
        rgba_data: Vec<u8>,
    ) -> io::Result<IconImage> {
        if !FrameSpec::new(width, height).is_valid() {
            invalid_input!(
                "Invalid frame size (was {}x{}, but each side must be \
                 between {} and {})",
                width,
                height,
                MIN_SIDE,
                MAX_SIDE
            );
        }
        let expected_data_len = (width as usize) * (height as usize) * 4;
        if rgba_data.len() != expected_data_len {
            invalid_input!(
                "Invalid data length (was {}, but must be {} for {}x{} image)",
                rgba_data.len(),
                expected_data_len,
                width,
                height
            );
        }
        Ok(IconImage { width, height, rgba_data })
    }

    /// Returns the width of the frame, in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the frame, in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the size of the frame.
    pub fn spec(&self) -> FrameSpec {
        FrameSpec::new(self.width, self.height)
    }

    /// Returns the RGBA data for this frame, in row-major order from top to
    /// bottom.
    pub fn rgba_data(&self) -> &[u8] {
        &self.rgba_data
    }

    /// Returns true if every pixel is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.rgba_data.chunks_exact(4).all(|pixel| pixel[3] == u8::MAX)
    }

    /// Encodes the frame as an 8-bit RGBA PNG file.  The alpha channel is
    /// always written, even when the frame is fully opaque, so that every
    /// frame in an icon has 32 bits per pixel.
    pub fn write_png<W: Write>(
        &self,
        compression: png::Compression,
        writer: W,
    ) -> io::Result<()> {
        match self.write_png_enc(compression, writer) {
            Ok(()) => Ok(()),
            Err(png::EncodingError::IoError(error)) => Err(error),
            Err(png::EncodingError::Format(error)) => {
                invalid_input!("PNG format error: {}", error);
            }
            Err(png::EncodingError::LimitsExceeded) => {
                invalid_input!("PNG limits exceeded");
            }
            Err(png::EncodingError::Parameter(error)) => {
                invalid_input!("PNG parameter error: {}", error);
            }
        }
    }

    fn write_png_enc<W: Write>(
        &self,
        compression: png::Compression,
        writer: W,
    ) -> Result<(), png::EncodingError> {
        let mut encoder = png::Encoder::new(writer, self.width, self.height);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_compression(compression);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.rgba_data)?;
        writer.finish()
    }
}

//===========================================================================//


//===========================================================================//
