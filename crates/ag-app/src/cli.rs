use std::path::PathBuf;

use clap::Parser;

/// asciigram : convertit une image en art ASCII.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image source (PNG, JPEG, BMP, GIF).
    pub image: PathBuf,

    /// Dossier de sortie : écrit `<DIR>/ascii_art.txt` au format page.
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Rendre au format page (150×150) au lieu du terminal.
    #[arg(long, default_value_t = false)]
    pub page: bool,

    /// Formule de luminosité : average, lightness, luminosity.
    /// Toute autre valeur retombe sur average.
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Inverser la rampe (pour fond clair).
    #[arg(short, long, default_value_t = false)]
    pub invert: bool,

    /// Facteur de calibration horizontal (pixels par colonne).
    #[arg(long)]
    pub x_scale: Option<u32>,

    /// Facteur de calibration vertical (pixels par ligne).
    #[arg(long)]
    pub y_scale: Option<u32>,

    /// Rampe prédéfinie : compact, standard, classic.
    #[arg(long)]
    pub charset: Option<String>,

    /// Rampe littérale, du plus clair au plus dense (prioritaire sur --charset).
    #[arg(long)]
    pub ramp: Option<String>,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
