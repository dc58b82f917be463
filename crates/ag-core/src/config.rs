use std::convert::Infallible;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::charset::GlyphRamp;
use crate::error::CoreError;

/// Fixed target used when rendering for a printed page.
pub const PAGE_TARGET: GridSize = GridSize {
    rows: 150,
    cols: 150,
};

/// Grid used when the terminal size cannot be queried.
pub const FALLBACK_TERMINAL: GridSize = GridSize { rows: 24, cols: 80 };

/// Name of the file written by `print_to_file`.
pub const OUTPUT_FILE_NAME: &str = "ascii_art.txt";

/// Taille d'une grille de caractères cible.
///
/// # Example
/// ```
/// use ag_core::config::{GridSize, PAGE_TARGET};
/// assert_eq!(PAGE_TARGET, GridSize { rows: 150, cols: 150 });
/// assert!(!PAGE_TARGET.is_degenerate());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    /// Number of text rows.
    pub rows: u32,
    /// Number of characters per row.
    pub cols: u32,
}

impl GridSize {
    /// `true` if either dimension is zero.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

/// Formule de luminosité appliquée à chaque pixel.
///
/// Parsing never fails: an unknown or empty name resolves to `Average`.
///
/// # Example
/// ```
/// use ag_core::config::BrightnessMode;
/// assert_eq!(BrightnessMode::from_name("luminosity"), BrightnessMode::Luminosity);
/// assert_eq!(BrightnessMode::from_name("ave"), BrightnessMode::Average);
/// assert_eq!(BrightnessMode::from_name(""), BrightnessMode::Average);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum BrightnessMode {
    /// `(r + g + b) / 3`.
    #[default]
    Average,
    /// `(max + min) / 2`.
    Lightness,
    /// `0.21 r + 0.72 g + 0.07 b`.
    Luminosity,
}

impl BrightnessMode {
    /// Resolve a mode name, falling back to `Average`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "average" => Self::Average,
            "lightness" => Self::Lightness,
            "luminosity" => Self::Luminosity,
            other => {
                log::debug!("Mode de luminosité inconnu '{other}', repli sur 'average'");
                Self::Average
            }
        }
    }

    /// Canonical lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Average => "average",
            Self::Lightness => "lightness",
            Self::Luminosity => "luminosity",
        }
    }
}

impl FromStr for BrightnessMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<String> for BrightnessMode {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl From<BrightnessMode> for String {
    fn from(mode: BrightnessMode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for BrightnessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot de configuration pour une passe de rendu.
///
/// Un renderer en garde sa propre copie : modifier la valeur d'origine après
/// coup n'affecte pas un rendu en cours.
///
/// # Example
/// ```
/// use ag_core::config::{BrightnessMode, RenderConfig};
/// let config = RenderConfig::default();
/// assert_eq!((config.x_scale, config.y_scale), (1, 2));
/// assert_eq!(config.mode, BrightnessMode::Average);
/// assert!(!config.invert);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Horizontal calibration factor (pixels per character column).
    pub x_scale: u32,
    /// Vertical calibration factor (pixels per character row).
    pub y_scale: u32,
    /// Brightness formula.
    pub mode: BrightnessMode,
    /// Reverse the glyph ramp (for light backgrounds).
    pub invert: bool,
    /// Glyph ramp, sparsest first.
    pub ramp: GlyphRamp,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            x_scale: 1,
            y_scale: 2,
            mode: BrightnessMode::Average,
            invert: false,
            ramp: GlyphRamp::default(),
        }
    }
}

impl RenderConfig {
    /// Copy with new calibration factors.
    #[must_use]
    pub fn with_scale(mut self, x_scale: u32, y_scale: u32) -> Self {
        self.x_scale = x_scale;
        self.y_scale = y_scale;
        self.clamp_all();
        self
    }

    /// Copy with another brightness formula.
    #[must_use]
    pub fn with_mode(mut self, mode: BrightnessMode) -> Self {
        self.mode = mode;
        self
    }

    /// Copy with inversion toggled to `invert`.
    #[must_use]
    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Copy with another glyph ramp.
    #[must_use]
    pub fn with_ramp(mut self, ramp: GlyphRamp) -> Self {
        self.ramp = ramp;
        self
    }

    /// Clamp numeric fields to their valid ranges.
    /// Called after TOML deserialization; calibration factors are divisors.
    pub fn clamp_all(&mut self) {
        self.x_scale = self.x_scale.max(1);
        self.y_scale = self.y_scale.max(1);
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    render: Option<RenderSection>,
}

/// Render section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct RenderSection {
    x_scale: Option<u32>,
    y_scale: Option<u32>,
    mode: Option<String>,
    invert: Option<bool>,
    charset: Option<String>,
    ramp: Option<String>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, names an unknown
/// charset preset, or sets an empty `ramp`.
///
/// # Example
/// ```no_run
/// use ag_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("asciigram.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<RenderConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Configuration invalide dans {}", path.display()))
}

/// Parse TOML content into a config, applying defaults for missing keys.
///
/// # Errors
/// Same conditions as [`load_config`], minus the I/O.
pub fn parse_config(content: &str) -> Result<RenderConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = RenderConfig::default();
    let Some(r) = file.render else {
        return Ok(config);
    };

    if let Some(v) = r.x_scale {
        config.x_scale = v;
    }
    if let Some(v) = r.y_scale {
        config.y_scale = v;
    }
    if let Some(v) = r.mode {
        config.mode = BrightnessMode::from_name(&v);
    }
    if let Some(v) = r.invert {
        config.invert = v;
    }
    if let Some(name) = r.charset {
        config.ramp = GlyphRamp::preset(&name)
            .ok_or_else(|| CoreError::Config(format!("charset inconnu : {name}")))?;
    }
    if let Some(glyphs) = r.ramp {
        config.ramp = GlyphRamp::new(&glyphs)
            .map_err(|e| CoreError::Config(format!("ramp : {e}")))?;
    }

    config.clamp_all();
    Ok(config)
}
