use ag_core::error::CoreError;
use ag_core::frame::FrameBuffer;
use ag_core::traits::Scaler;
use anyhow::{Context, Result};
use fast_image_resize::images::{Image, ImageRef};
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer as FirResizer};

/// Resizer réutilisable wrappant fast_image_resize.
///
/// Uses a box filter by default: every output pixel averages the source
/// area it covers, which suits the large downscales of ASCII rendering.
///
/// # Example
/// ```
/// use ag_source::resize::Resizer;
/// use ag_core::traits::Scaler;
/// use ag_core::frame::FrameBuffer;
/// let mut r = Resizer::new();
/// let dst = r.resize(&FrameBuffer::new(100, 100), 50, 25).unwrap();
/// assert_eq!((dst.width, dst.height), (50, 25));
/// ```
pub struct Resizer {
    inner: FirResizer,
    options: ResizeOptions,
}

impl Resizer {
    /// Create a resizer using the box filter.
    #[must_use]
    pub fn new() -> Self {
        Self::with_algorithm(ResizeAlg::Convolution(FilterType::Box))
    }

    /// Create a resizer using another fast_image_resize algorithm.
    #[must_use]
    pub fn with_algorithm(alg: ResizeAlg) -> Self {
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new().resize_alg(alg),
        }
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scaler for Resizer {
    fn resize(&mut self, src: &FrameBuffer, width: u32, height: u32) -> Result<FrameBuffer> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions { width, height }.into());
        }
        if src.width == width && src.height == height {
            return Ok(src.clone());
        }

        let src_image = ImageRef::new(src.width, src.height, &src.data, PixelType::U8x4)
            .context("Invalid source dimensions")?;
        let mut dst_image = Image::new(width, height, PixelType::U8x4);

        self.inner
            .resize(&src_image, &mut dst_image, Some(&self.options))
            .context("Resize failed")?;

        Ok(FrameBuffer {
            data: dst_image.into_vec(),
            width,
            height,
        })
    }
}

/// Convenience for one-shot usage.
///
/// # Errors
/// Returns an error if the resize operation fails.
pub fn resize_frame(src: &FrameBuffer, width: u32, height: u32) -> Result<FrameBuffer> {
    Resizer::new().resize(src, width, height)
}
