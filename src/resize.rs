use crate::error::BoxError;
use crate::framespec::FrameSpec;
use crate::image::IconImage;
use crate::source::SourceImage;
use image::imageops::{self, FilterType};

//===========================================================================//

/// Produces a resized copy of the source image for one frame.
///
/// Implementations must not modify the source, must return a frame of exactly
/// the requested size, and must carry the alpha channel through unchanged in
/// meaning (an opaque source gives an opaque frame).  A resizer may be shared
/// between threads when frames are rendered in parallel.
pub trait Resizer: Sync {
    /// Resizes `source` to `spec`.
    fn resize(
        &self,
        source: &SourceImage,
        spec: FrameSpec,
    ) -> Result<IconImage, BoxError>;
}

impl<R: Resizer + ?Sized> Resizer for &R {
    fn resize(
        &self,
        source: &SourceImage,
        spec: FrameSpec,
    ) -> Result<IconImage, BoxError> {
        (**self).resize(source, spec)
    }
}

//===========================================================================//

/// Resamples with one of the `image` crate's filters; Lanczos3 by default.
///
/// The aspect ratio is not preserved: the source is stretched to fill the
/// frame exactly.
#[derive(Clone, Copy, Debug)]
pub struct ImageResizer {
    filter: FilterType,
}

impl ImageResizer {
    /// Creates a resizer that uses the given filter for every frame.
    pub fn new(filter: FilterType) -> ImageResizer {
        ImageResizer { filter }
    }

    /// Returns the resampling filter.
    pub fn filter(&self) -> FilterType {
        self.filter
    }
}

impl Default for ImageResizer {
    fn default() -> ImageResizer {
        ImageResizer::new(FilterType::Lanczos3)
    }
}

impl Resizer for ImageResizer {
    fn resize(
        &self,
        source: &SourceImage,
        spec: FrameSpec,
    ) -> Result<IconImage, BoxError> {
        let resized = imageops::resize(
            source.pixels(),
            spec.width(),
            spec.height(),
            self.filter,
        );
        let (width, height) = resized.dimensions();
        Ok(IconImage::from_rgba_data(width, height, resized.into_raw())?)
    }
}

//===========================================================================//


//===========================================================================//
