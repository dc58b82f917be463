use std::iter::FusedIterator;

use ag_core::config::{BrightnessMode, FALLBACK_TERMINAL, GridSize, PAGE_TARGET, RenderConfig};
use ag_core::error::CoreError;
use ag_core::frame::FrameBuffer;
use ag_core::traits::{Scaler, TerminalSize};
use anyhow::{Context, Result};

use crate::brightness::brightness;
use crate::fit::{effective_size, fit_divisor, scaled_size};
use crate::glyph::GlyphMapper;

/// Orchestre fit → resize → scan → mapping pour une configuration figée.
///
/// The renderer owns its [`RenderConfig`]; each `render*` call rescales and
/// rescans the source image and returns a fresh [`Rows`] sequence.
///
/// # Example
/// ```
/// use ag_ascii::AsciiRenderer;
/// use ag_core::config::RenderConfig;
/// use ag_core::frame::FrameBuffer;
///
/// let frame = FrameBuffer::from_rgb_rows(&[
///     vec![(0, 0, 0), (255, 255, 255)],
/// ]).unwrap();
/// let renderer = AsciiRenderer::new(RenderConfig::default().with_scale(1, 1));
/// let rows: Vec<String> = renderer.render_scaled(frame).collect();
/// assert_eq!(rows, vec![" @".to_string()]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct AsciiRenderer {
    config: RenderConfig,
}

impl AsciiRenderer {
    /// Create a renderer bound to `config`.
    #[must_use]
    pub fn new(mut config: RenderConfig) -> Self {
        config.clamp_all();
        Self { config }
    }

    /// Configuration used by every render pass of this renderer.
    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Rows fitted to the live terminal size.
    ///
    /// Falls back to [`FALLBACK_TERMINAL`] if the size cannot be queried.
    ///
    /// # Errors
    /// Returns an error if the image is empty or the resize fails.
    pub fn render_to_terminal(
        &self,
        image: &FrameBuffer,
        terminal: &dyn TerminalSize,
        scaler: &mut dyn Scaler,
    ) -> Result<Rows> {
        self.render(image, terminal_target(terminal), scaler)
    }

    /// Rows fitted to the fixed page target ([`PAGE_TARGET`]).
    ///
    /// # Errors
    /// Returns an error if the image is empty or the resize fails.
    pub fn render_to_page(&self, image: &FrameBuffer, scaler: &mut dyn Scaler) -> Result<Rows> {
        self.render(image, PAGE_TARGET, scaler)
    }

    /// Rows fitted to an arbitrary `target` grid.
    ///
    /// # Errors
    /// Returns an error if the image is empty, `target` has a zero
    /// dimension, or the resize fails.
    pub fn render(
        &self,
        image: &FrameBuffer,
        target: GridSize,
        scaler: &mut dyn Scaler,
    ) -> Result<Rows> {
        if image.is_empty() {
            return Err(CoreError::InvalidDimensions {
                width: image.width,
                height: image.height,
            }
            .into());
        }

        let (eff_w, eff_h) = effective_size(
            image.width,
            image.height,
            self.config.x_scale,
            self.config.y_scale,
        );
        let divisor = fit_divisor(eff_w, eff_h, target)?;
        let (width, height) = scaled_size(eff_w, eff_h, divisor);
        log::debug!(
            "{}×{} → {width}×{height} (diviseur {divisor}, cible {}×{})",
            image.width,
            image.height,
            target.cols,
            target.rows
        );

        let scaled = if (width, height) == (image.width, image.height) {
            image.clone()
        } else {
            scaler
                .resize(image, width, height)
                .with_context(|| format!("Redimensionnement vers {width}×{height} impossible"))?
        };
        Ok(self.render_scaled(scaled))
    }

    /// Rows for an image that is already at output size (one pixel per glyph).
    #[must_use]
    pub fn render_scaled(&self, scaled: FrameBuffer) -> Rows {
        Rows::new(scaled, &self.config)
    }
}

/// Live terminal size, or the fallback grid when unavailable.
///
/// A terminal reporting a zero dimension counts as unavailable.
#[must_use]
pub fn terminal_target(terminal: &dyn TerminalSize) -> GridSize {
    match terminal.query() {
        Ok(size) if !size.is_degenerate() => size,
        Ok(size) => {
            log::warn!(
                "Terminal de taille nulle ({}×{}), repli sur {}×{}",
                size.cols,
                size.rows,
                FALLBACK_TERMINAL.cols,
                FALLBACK_TERMINAL.rows
            );
            FALLBACK_TERMINAL
        }
        Err(e) => {
            log::warn!(
                "{e:#}, repli sur {}×{}",
                FALLBACK_TERMINAL.cols,
                FALLBACK_TERMINAL.rows
            );
            FALLBACK_TERMINAL
        }
    }
}

/// One-pass sequence of text rows, top to bottom.
///
/// Owns the scaled frame; brightness bounds are computed up front, each row
/// is built on demand. Every row holds exactly `width()` glyphs and exactly
/// `height()` rows are produced. Dropping it early is always safe.
#[derive(Debug)]
pub struct Rows {
    frame: FrameBuffer,
    mode: BrightnessMode,
    mapper: GlyphMapper,
    next: u32,
}

impl Rows {
    fn new(frame: FrameBuffer, config: &RenderConfig) -> Self {
        let mode = config.mode;
        let (min, max) = brightness_bounds(&frame, mode);
        log::debug!("Luminosité observée {min}..={max} ({mode})");
        Self {
            mapper: GlyphMapper::new(&config.ramp, config.invert, min, max),
            frame,
            mode,
            next: 0,
        }
    }

    /// Next row, or `None` once every row has been produced.
    pub fn next_row(&mut self) -> Option<String> {
        if self.next >= self.frame.height {
            return None;
        }
        let y = self.next;
        self.next += 1;
        Some(
            self.frame
                .row(y)
                .map(|px| self.mapper.map(brightness(px, self.mode)))
                .collect(),
        )
    }

    /// Glyphs per row.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.frame.width
    }

    /// Total number of rows.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.frame.height
    }

    /// Mapper calibrated for this image.
    #[must_use]
    pub fn mapper(&self) -> &GlyphMapper {
        &self.mapper
    }
}

impl Iterator for Rows {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.next_row()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.frame.height.saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows {}

impl FusedIterator for Rows {}

/// Minimum and maximum brightness over every pixel, `(0, 0)` if empty.
#[must_use]
pub fn brightness_bounds(frame: &FrameBuffer, mode: BrightnessMode) -> (u8, u8) {
    frame
        .pixels()
        .map(|px| brightness(px, mode))
        .fold(None, |acc: Option<(u8, u8)>, b| match acc {
            None => Some((b, b)),
            Some((lo, hi)) => Some((lo.min(b), hi.max(b))),
        })
        .unwrap_or((0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ag_core::charset::GlyphRamp;

    /// Nearest-neighbour resize, enough for shape checks.
    struct Nearest;

    impl Scaler for Nearest {
        fn resize(&mut self, src: &FrameBuffer, width: u32, height: u32) -> Result<FrameBuffer> {
            let rows: Vec<Vec<(u8, u8, u8)>> = (0..height)
                .map(|y| {
                    (0..width)
                        .map(|x| src.rgb(x * src.width / width, y * src.height / height))
                        .collect()
                })
                .collect();
            Ok(FrameBuffer::from_rgb_rows(&rows)?)
        }
    }

    struct Fixed(Option<GridSize>);

    impl TerminalSize for Fixed {
        fn query(&self) -> Result<GridSize> {
            self.0
                .ok_or_else(|| CoreError::TerminalUnavailable("pas de tty".into()).into())
        }
    }

    fn gradient(width: u32, height: u32) -> FrameBuffer {
        let rows: Vec<Vec<(u8, u8, u8)>> = (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| {
                        let v = ((x + y) * 255 / (width + height).max(2)) as u8;
                        (v, v, v)
                    })
                    .collect()
            })
            .collect();
        FrameBuffer::from_rgb_rows(&rows).unwrap()
    }

    fn rgb_stripes() -> FrameBuffer {
        FrameBuffer::from_rgb_rows(&[
            vec![(254, 0, 0); 3],
            vec![(0, 254, 0); 3],
            vec![(0, 0, 254); 3],
        ])
        .unwrap()
    }

    #[test]
    fn every_row_is_flushed_with_exact_width() {
        let renderer = AsciiRenderer::new(RenderConfig::default().with_scale(1, 1));
        for width in 1..=9 {
            for height in 1..=5 {
                let rows: Vec<String> = renderer
                    .render(&gradient(width, height), PAGE_TARGET, &mut Nearest)
                    .unwrap()
                    .collect();
                assert_eq!(rows.len(), height as usize, "{width}×{height}");
                for row in &rows {
                    assert_eq!(row.chars().count(), width as usize, "{width}×{height}");
                }
            }
        }
    }

    #[test]
    fn stripes_collapse_to_one_row() {
        let renderer = AsciiRenderer::new(RenderConfig::default().with_scale(1, 3));
        let rows = renderer.render_to_page(&rgb_stripes(), &mut Nearest).unwrap();
        assert_eq!((rows.width(), rows.height()), (3, 1));
        assert_eq!(rows.len(), 1);
        let collected: Vec<String> = rows.collect();
        assert_eq!(collected.len(), 1);
        assert_eq!(collected[0].chars().count(), 3);
    }

    #[test]
    fn stripes_render_in_every_mode() {
        for mode in ["average", "lightness", "luminosity", "bogus"] {
            let config = RenderConfig::default()
                .with_scale(1, 1)
                .with_mode(BrightnessMode::from_name(mode));
            let rows: Vec<String> = AsciiRenderer::new(config)
                .render_to_page(&rgb_stripes(), &mut Nearest)
                .unwrap()
                .collect();
            assert_eq!(rows.len(), 3);
        }
    }

    #[test]
    fn flat_image_renders_first_glyph_everywhere() {
        let frame = FrameBuffer::from_rgb_rows(&vec![vec![(90, 90, 90); 4]; 2]).unwrap();
        let renderer = AsciiRenderer::new(
            RenderConfig::default()
                .with_scale(1, 1)
                .with_ramp(GlyphRamp::new("xyz").unwrap()),
        );
        let rows: Vec<String> = renderer.render_scaled(frame).collect();
        assert_eq!(rows, vec!["xxxx".to_string(), "xxxx".to_string()]);
    }

    #[test]
    fn inversion_swaps_darkest_and_brightest() {
        let frame = FrameBuffer::from_rgb_rows(&[vec![(0, 0, 0), (128, 128, 128), (255, 255, 255)]])
            .unwrap();
        let ramp = GlyphRamp::new(" .:#@").unwrap();
        let normal = AsciiRenderer::new(RenderConfig::default().with_ramp(ramp.clone()));
        let inverted = AsciiRenderer::new(RenderConfig::default().with_ramp(ramp).with_invert(true));
        assert_eq!(normal.render_scaled(frame.clone()).next_row().unwrap(), " :@");
        assert_eq!(inverted.render_scaled(frame).next_row().unwrap(), "@: ");
    }

    #[test]
    fn range_is_calibrated_to_the_image() {
        // 100..=110 still spans the whole ramp
        let frame = FrameBuffer::from_rgb_rows(&[vec![(100, 100, 100), (110, 110, 110)]]).unwrap();
        let renderer = AsciiRenderer::new(RenderConfig::default());
        assert_eq!(renderer.render_scaled(frame).next_row().unwrap(), " @");
    }

    #[test]
    fn mapper_is_calibrated_on_the_scaled_frame() {
        let frame = FrameBuffer::from_rgb_rows(&[vec![(40, 40, 40), (200, 200, 200)]]).unwrap();
        let rows = AsciiRenderer::default().render_scaled(frame);
        assert_eq!(rows.mapper().range(), 160);
        assert_eq!(rows.mapper().glyphs().len(), 10);
        assert_eq!(rows.mapper().map(40), ' ');
        assert_eq!(rows.mapper().map(200), '@');
    }

    #[test]
    fn rows_are_finite_and_fused() {
        let renderer = AsciiRenderer::new(RenderConfig::default().with_scale(1, 1));
        let mut rows = renderer.render_scaled(gradient(4, 2));
        assert_eq!(rows.size_hint(), (2, Some(2)));
        assert!(rows.next_row().is_some());
        assert!(rows.next_row().is_some());
        assert!(rows.next_row().is_none());
        assert!(rows.next().is_none());
    }

    #[test]
    fn large_image_is_fitted_to_terminal() {
        let renderer = AsciiRenderer::new(RenderConfig::default());
        let target = GridSize { rows: 20, cols: 40 };
        let rows = renderer
            .render_to_terminal(&gradient(400, 400), &Fixed(Some(target)), &mut Nearest)
            .unwrap();
        assert!(rows.width() <= 40);
        assert!(rows.height() <= 20);
        // 400×200 effective, divisor 10
        assert_eq!((rows.width(), rows.height()), (40, 20));
    }

    #[test]
    fn unavailable_terminal_falls_back() {
        assert_eq!(terminal_target(&Fixed(None)), FALLBACK_TERMINAL);
        let zero = GridSize { rows: 0, cols: 120 };
        assert_eq!(terminal_target(&Fixed(Some(zero))), FALLBACK_TERMINAL);
        let rows = AsciiRenderer::default()
            .render_to_terminal(&gradient(800, 100), &Fixed(None), &mut Nearest)
            .unwrap();
        assert!(rows.width() <= FALLBACK_TERMINAL.cols);
        assert!(rows.height() <= FALLBACK_TERMINAL.rows);
    }

    #[test]
    fn empty_image_is_rejected() {
        let frame = FrameBuffer::new(0, 0);
        assert!(AsciiRenderer::default().render_to_page(&frame, &mut Nearest).is_err());
    }

    #[test]
    fn zero_target_propagates() {
        let target = GridSize { rows: 0, cols: 0 };
        let err = AsciiRenderer::default()
            .render(&gradient(10, 10), target, &mut Nearest)
            .unwrap_err();
        assert!(err.downcast_ref::<CoreError>().is_some());
    }

    #[test]
    fn bounds_of_known_frame() {
        let frame = FrameBuffer::from_rgb_rows(&[vec![(123, 34, 211), (10, 10, 10)]]).unwrap();
        assert_eq!(brightness_bounds(&frame, BrightnessMode::Average), (10, 122));
        assert_eq!(brightness_bounds(&FrameBuffer::new(0, 0), BrightnessMode::Average), (0, 0));
    }
}
