use crate::error::BoxError;
use crate::image::IconImage;

//===========================================================================//

/// Turns one resized frame into a self-contained, independently decodable
/// image stream that supports an alpha channel.
pub trait Compressor: Sync {
    /// Compresses `image`.  The result must not be empty.
    fn compress(&self, image: &IconImage) -> Result<Vec<u8>, BoxError>;
}

impl<C: Compressor + ?Sized> Compressor for &C {
    fn compress(&self, image: &IconImage) -> Result<Vec<u8>, BoxError> {
        (**self).compress(image)
    }
}

//===========================================================================//

/// Writes each frame as an 8-bit RGBA PNG.
#[derive(Clone, Copy, Debug)]
pub struct PngCompressor {
    compression: png::Compression,
}

impl PngCompressor {
    /// Creates a compressor with the given zlib effort.
    pub fn new(compression: png::Compression) -> PngCompressor {
        PngCompressor { compression }
    }

    /// Returns the zlib effort used for each frame.
    pub fn compression(&self) -> png::Compression {
        self.compression
    }
}

impl Default for PngCompressor {
    fn default() -> PngCompressor {
        PngCompressor::new(png::Compression::Default)
    }
}

impl Compressor for PngCompressor {
    fn compress(&self, image: &IconImage) -> Result<Vec<u8>, BoxError> {
        let mut data = Vec::new();
        image.write_png(self.compression, &mut data)?;
        Ok(data)
    }
}

//===========================================================================//


//===========================================================================//
