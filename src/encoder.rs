use crate::compress::{Compressor, PngCompressor};
use crate::error::EncodeError;
use crate::framespec::FrameSpec;
use crate::icondir::{self, ContainerFile, Frame};
use crate::resize::{ImageResizer, Resizer};
use crate::source::SourceImage;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::io::Write;

//===========================================================================//

/// Builds ICO files out of a single source image.
///
/// For every requested size, the source is resized with the encoder's
/// [`Resizer`] and the result is compressed with its [`Compressor`].  The
/// compressed frames are then written, in request order, after the ICO header
/// and directory.  Any failure aborts the whole file; no frame is ever
/// skipped.
#[derive(Clone, Debug, Default)]
pub struct IconEncoder<R = ImageResizer, C = PngCompressor> {
    resizer: R,
    compressor: C,
}

impl IconEncoder {
    /// Creates an encoder that resamples with Lanczos3 and writes PNG frames.
    pub fn new() -> IconEncoder {
        IconEncoder::default()
    }
}

impl<R: Resizer, C: Compressor> IconEncoder<R, C> {
    /// Creates an encoder that uses the given resizer and compressor for
    /// every frame.
    pub fn with_collaborators(resizer: R, compressor: C) -> IconEncoder<R, C> {
        IconEncoder { resizer, compressor }
    }

    /// Returns the resizer used for every frame.
    pub fn resizer(&self) -> &R {
        &self.resizer
    }

    /// Returns the compressor used for every frame.
    pub fn compressor(&self) -> &C {
        &self.compressor
    }

    /// Encodes `source` at each of `specs`, in order, and returns the
    /// finished file.
    pub fn encode(
        &self,
        source: &SourceImage,
        specs: &[FrameSpec],
    ) -> Result<ContainerFile, EncodeError> {
        let frames = self.render_frames(source, specs)?;
        let container = ContainerFile::assemble(frames)?;
        log::info!(
            "Encoded {} frame(s) into {} bytes",
            container.entries().len(),
            container.len()
        );
        Ok(container)
    }

    /// Encodes `source` at the default sizes (16 through 255 pixels square).
    pub fn encode_defaults(
        &self,
        source: &SourceImage,
    ) -> Result<ContainerFile, EncodeError> {
        self.encode(source, &FrameSpec::defaults())
    }

    /// Encodes `source` at each of `specs` and writes the file straight to
    /// `writer`.  The writer is never seeked, so pipes and sockets work too.
    /// Nothing is written unless every frame was produced successfully.
    pub fn encode_to<W: Write>(
        &self,
        source: &SourceImage,
        specs: &[FrameSpec],
        writer: W,
    ) -> Result<(), EncodeError> {
        let frames = self.render_frames(source, specs)?;
        let (entries, file_len) = icondir::layout(&frames)?;
        icondir::write_container(&entries, &frames, writer)?;
        log::info!("Wrote {} frame(s), {} bytes", entries.len(), file_len);
        Ok(())
    }

    fn render_frames(
        &self,
        source: &SourceImage,
        specs: &[FrameSpec],
    ) -> Result<Vec<Frame>, EncodeError> {
        validate_specs(specs)?;
        log::debug!(
            "Rendering {} frame(s) from {}x{} source ({:?})",
            specs.len(),
            source.width(),
            source.height(),
            source.color_mode()
        );
        // Frames are independent of each other; only the layout that
        // follows has to see them all, in request order.
        // When several frames fail, the lowest index is the one reported.
        #[cfg(feature = "rayon")]
        let results: Vec<Result<Frame, EncodeError>> = specs
            .par_iter()
            .enumerate()
            .map(|(index, &spec)| self.render_frame(source, index, spec))
            .collect();
        #[cfg(not(feature = "rayon"))]
        let results = specs
            .iter()
            .enumerate()
            .map(|(index, &spec)| self.render_frame(source, index, spec));
        results.into_iter().collect()
    }

    fn render_frame(
        &self,
        source: &SourceImage,
        index: usize,
        spec: FrameSpec,
    ) -> Result<Frame, EncodeError> {
        let resized = self.resizer.resize(source, spec).map_err(|source| {
            EncodeError::ResizeFailed { index, spec, source }
        })?;
        if resized.spec() != spec {
            return Err(EncodeError::ResizeFailed {
                index,
                spec,
                source: format!("resizer produced a {} image", resized.spec())
                    .into(),
            });
        }
        let payload = self.compressor.compress(&resized).map_err(|source| {
            EncodeError::CompressFailed { index, spec, source }
        })?;
        if payload.is_empty() {
            return Err(EncodeError::CompressFailed {
                index,
                spec,
                source: "compressor produced no data".into(),
            });
        }
        log::debug!("Frame {}: {} -> {} bytes", index, spec, payload.len());
        Ok(Frame { spec, payload })
    }
}

/// Checks the whole request before any frame is rendered.
fn validate_specs(specs: &[FrameSpec]) -> Result<(), EncodeError> {
    if specs.is_empty() {
        return Err(EncodeError::EmptySpecList);
    }
    if specs.len() > (u16::MAX as usize) {
        return Err(EncodeError::TooManyFrames { count: specs.len() });
    }
    for (index, spec) in specs.iter().enumerate() {
        spec.validate(index)?;
    }
    Ok(())
}

//===========================================================================//


//===========================================================================//
