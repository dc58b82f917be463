use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// 10 caractères : compact, bon contraste. Rampe par défaut.
pub const CHARSET_COMPACT: &str = " .:-=+*#%@";

/// 70 caractères : Paul Bourke, bon équilibre.
pub const CHARSET_STANDARD: &str =
    " .'`^\",:;Il!i><~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// 65 caractères : rampe historique, sans espace en tête.
pub const CHARSET_CLASSIC: &str =
    "`^\",:;Il!i~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Named presets, in the order the CLI lists them.
pub const PRESETS: &[(&str, &str)] = &[
    ("compact", CHARSET_COMPACT),
    ("standard", CHARSET_STANDARD),
    ("classic", CHARSET_CLASSIC),
];

/// Ordered glyph sequence, sparsest first.
///
/// Index 0 is used for the darkest pixels of a normal (non-inverted) render.
/// The stored order never changes; inversion works on a derived copy.
///
/// # Example
/// ```
/// use ag_core::charset::GlyphRamp;
/// let ramp = GlyphRamp::new(" .:#@").unwrap();
/// assert_eq!(ramp.len(), 5);
/// assert_eq!(ramp.effective(true)[0], '@');
/// assert_eq!(ramp.as_chars()[0], ' ');
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct GlyphRamp {
    chars: Vec<char>,
}

impl GlyphRamp {
    /// Build a ramp from a string ordered lightest→densest.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyRamp`] if `glyphs` is empty.
    pub fn new(glyphs: &str) -> Result<Self, CoreError> {
        let chars: Vec<char> = glyphs.chars().collect();
        if chars.is_empty() {
            return Err(CoreError::EmptyRamp);
        }
        Ok(Self { chars })
    }

    /// Look up a named preset (`compact`, `standard`, `classic`).
    ///
    /// # Example
    /// ```
    /// use ag_core::charset::GlyphRamp;
    /// assert!(GlyphRamp::preset("standard").is_some());
    /// assert!(GlyphRamp::preset("nope").is_none());
    /// ```
    #[must_use]
    pub fn preset(name: &str) -> Option<Self> {
        PRESETS
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, glyphs)| Self {
                chars: glyphs.chars().collect(),
            })
    }

    /// Number of glyphs in the ramp (always ≥ 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always `false`: an empty ramp cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Glyphs in stored order.
    #[must_use]
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// Ramp actually used for lookups: reversed when `invert` is set.
    #[must_use]
    pub fn effective(&self, invert: bool) -> Vec<char> {
        if invert {
            self.chars.iter().rev().copied().collect()
        } else {
            self.chars.clone()
        }
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        Self {
            chars: CHARSET_COMPACT.chars().collect(),
        }
    }
}

impl fmt::Display for GlyphRamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.chars {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl TryFrom<String> for GlyphRamp {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<GlyphRamp> for String {
    fn from(ramp: GlyphRamp) -> Self {
        ramp.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_ramp_is_rejected() {
        assert!(matches!(GlyphRamp::new(""), Err(CoreError::EmptyRamp)));
    }

    #[test]
    fn default_ramp_is_ten_glyphs_from_space() {
        let ramp = GlyphRamp::default();
        assert_eq!(ramp.len(), 10);
        assert_eq!(ramp.as_chars()[0], ' ');
        assert_eq!(ramp.as_chars()[9], '@');
    }

    #[test]
    fn inversion_does_not_touch_stored_order() {
        let ramp = GlyphRamp::new("abc").unwrap();
        assert_eq!(ramp.effective(true), vec!['c', 'b', 'a']);
        assert_eq!(ramp.effective(false), vec!['a', 'b', 'c']);
        assert_eq!(ramp.as_chars(), &['a', 'b', 'c']);
    }

    #[test]
    fn double_reversal_restores_ramp() {
        let ramp = GlyphRamp::new(CHARSET_STANDARD).unwrap();
        let mut twice = ramp.effective(true);
        twice.reverse();
        assert_eq!(twice, ramp.effective(false));
    }

    #[test]
    fn presets_have_expected_lengths() {
        assert_eq!(GlyphRamp::preset("compact").unwrap().len(), 10);
        assert_eq!(GlyphRamp::preset("standard").unwrap().len(), 70);
        assert_eq!(GlyphRamp::preset("CLASSIC").unwrap().len(), 65);
    }

    #[test]
    fn standard_is_the_bourke_ramp() {
        let standard = GlyphRamp::preset("standard").unwrap();
        let glyphs: String = standard.as_chars().iter().collect();
        assert!(glyphs.contains("(|\\/t"));
        assert_eq!(standard.as_chars()[0], ' ');
        assert_eq!(standard.as_chars()[69], '$');
    }

    #[test]
    fn display_round_trips_through_string() {
        let ramp = GlyphRamp::new(" .:#@").unwrap();
        let s: String = ramp.clone().into();
        assert_eq!(GlyphRamp::try_from(s).unwrap(), ramp);
    }
}
