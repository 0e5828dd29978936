use crate::error::EncodeError;
use image::{DynamicImage, RgbaImage};
use std::path::Path;

//===========================================================================//

/// Whether a source image carries its own transparency.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ColorMode {
    /// Color (or gray) data only; every frame comes out fully opaque.
    Opaque,
    /// Color data plus an alpha channel, which is carried into every frame.
    WithAlpha,
}

impl ColorMode {
    /// Returns true for [`ColorMode::WithAlpha`].
    pub fn has_alpha(&self) -> bool {
        *self == ColorMode::WithAlpha
    }
}

//===========================================================================//

/// The decoded image that all frames of an icon are made from.
///
/// Pixels are kept as 8-bit RGBA regardless of the color mode; images without
/// an alpha channel are stored fully opaque.
#[derive(Clone)]
pub struct SourceImage {
    pixels: RgbaImage,
    color_mode: ColorMode,
}

impl SourceImage {
    /// Creates a source image from RGBA data, in row-major order from top to
    /// bottom.  Returns an error if either dimension is zero or if
    /// `rgba_data` isn't `4 * width * height` bytes long.
    pub fn from_rgba_data(
        width: u32,
        height: u32,
        rgba_data: Vec<u8>,
    ) -> Result<SourceImage, EncodeError> {
        SourceImage::check_buffer(width, height, 4, rgba_data.len())?;
        let pixels = RgbaImage::from_raw(width, height, rgba_data)
            .ok_or_else(|| EncodeError::unreadable("Malformed RGBA buffer"))?;
        Ok(SourceImage { pixels, color_mode: ColorMode::WithAlpha })
    }

    /// Creates an opaque source image from RGB data, in row-major order from
    /// top to bottom.  Returns an error if either dimension is zero or if
    /// `rgb_data` isn't `3 * width * height` bytes long.
    pub fn from_rgb_data(
        width: u32,
        height: u32,
        rgb_data: &[u8],
    ) -> Result<SourceImage, EncodeError> {
        SourceImage::check_buffer(width, height, 3, rgb_data.len())?;
        let mut rgba = Vec::with_capacity((rgb_data.len() / 3) * 4);
        for pixel in rgb_data.chunks_exact(3) {
            rgba.extend_from_slice(pixel);
            rgba.push(u8::MAX);
        }
        let pixels = RgbaImage::from_raw(width, height, rgba)
            .ok_or_else(|| EncodeError::unreadable("Malformed RGB buffer"))?;
        Ok(SourceImage { pixels, color_mode: ColorMode::Opaque })
    }

    /// Wraps an image decoded by the `image` crate.  The color mode follows
    /// the image's color type.
    pub fn from_dynamic_image(
        image: DynamicImage,
    ) -> Result<SourceImage, EncodeError> {
        if image.width() == 0 || image.height() == 0 {
            return Err(EncodeError::unreadable(format!(
                "Image has no pixels ({}x{})",
                image.width(),
                image.height()
            )));
        }
        let color_mode = if image.color().has_alpha() {
            ColorMode::WithAlpha
        } else {
            ColorMode::Opaque
        };
        Ok(SourceImage { pixels: image.into_rgba8(), color_mode })
    }

    /// Decodes a BMP, GIF, JPEG, or PNG file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<SourceImage, EncodeError> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|error| {
            EncodeError::unreadable(format!("{}: {}", path.display(), error))
        })?;
        SourceImage::from_dynamic_image(image)
    }

    /// Decodes an image from an in-memory file.
    pub fn load_from_memory(bytes: &[u8]) -> Result<SourceImage, EncodeError> {
        let image = image::load_from_memory(bytes)
            .map_err(|error| EncodeError::unreadable(error.to_string()))?;
        SourceImage::from_dynamic_image(image)
    }

    fn check_buffer(
        width: u32,
        height: u32,
        bytes_per_pixel: u64,
        actual_len: usize,
    ) -> Result<(), EncodeError> {
        if width == 0 || height == 0 {
            return Err(EncodeError::unreadable(format!(
                "Image has no pixels ({}x{})",
                width, height
            )));
        }
        let expected_len = (width as u64) * (height as u64) * bytes_per_pixel;
        if (actual_len as u64) != expected_len {
            return Err(EncodeError::unreadable(format!(
                "Invalid data length (was {}, but must be {} for {}x{} image)",
                actual_len, expected_len, width, height
            )));
        }
        Ok(())
    }

    /// Returns the width of the image, in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Returns the height of the image, in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Returns whether the image came with an alpha channel.
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Returns true if the image came with an alpha channel.
    pub fn has_alpha(&self) -> bool {
        self.color_mode.has_alpha()
    }

    /// Returns the pixels as 8-bit RGBA.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

//===========================================================================//


//===========================================================================//
