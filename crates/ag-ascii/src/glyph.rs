use ag_core::charset::GlyphRamp;

/// Index dans une rampe de `len` glyphes pour une luminosité ajustée.
///
/// `adjusted` is the raw brightness minus the observed minimum; `range` is
/// `max - min`. A flat image (`range == 0`) always maps to index 0.
///
/// # Example
/// ```
/// use ag_ascii::glyph::glyph_index;
/// assert_eq!(glyph_index(0, 200, 10), 0);
/// assert_eq!(glyph_index(200, 200, 10), 9);
/// assert_eq!(glyph_index(100, 200, 10), 5);
/// assert_eq!(glyph_index(42, 0, 10), 0);
/// ```
#[inline(always)]
#[must_use]
pub fn glyph_index(adjusted: u32, range: u32, len: usize) -> usize {
    if range == 0 || len <= 1 {
        return 0;
    }
    let last = len - 1;
    let scaled = f64::from(adjusted) * last as f64 / f64::from(range);
    (scaled.round() as usize).min(last)
}

/// Table brightness → glyph calibrated to one image's brightness range.
///
/// # Example
/// ```
/// use ag_ascii::glyph::GlyphMapper;
/// use ag_core::charset::GlyphRamp;
/// let ramp = GlyphRamp::new(" .:#@").unwrap();
/// let mapper = GlyphMapper::new(&ramp, false, 50, 150);
/// assert_eq!(mapper.map(50), ' ');
/// assert_eq!(mapper.map(150), '@');
/// let inverted = GlyphMapper::new(&ramp, true, 50, 150);
/// assert_eq!(inverted.map(50), '@');
/// ```
#[derive(Clone, Debug)]
pub struct GlyphMapper {
    glyphs: Vec<char>,
    min: u8,
    range: u32,
}

impl GlyphMapper {
    /// Build a mapper over the effective (possibly reversed) ramp for the
    /// observed brightness bounds `min..=max`.
    #[must_use]
    pub fn new(ramp: &GlyphRamp, invert: bool, min: u8, max: u8) -> Self {
        Self {
            glyphs: ramp.effective(invert),
            min,
            range: u32::from(max.saturating_sub(min)),
        }
    }

    /// Glyph for a raw brightness value.
    #[inline(always)]
    #[must_use]
    pub fn map(&self, brightness: u8) -> char {
        let adjusted = u32::from(brightness.saturating_sub(self.min));
        let idx = glyph_index(adjusted, self.range, self.glyphs.len());
        self.glyphs.get(idx).copied().unwrap_or(' ')
    }

    /// Observed `max - min`.
    #[must_use]
    pub fn range(&self) -> u32 {
        self.range
    }

    /// The ramp actually indexed by [`map`](Self::map).
    #[must_use]
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }
}
