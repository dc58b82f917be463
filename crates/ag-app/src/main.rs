use ag_core::charset::GlyphRamp;
use ag_core::config::{BrightnessMode, RenderConfig, load_config};
use ag_render::{AsciiArt, CrosstermTerminal, StdoutSink, Target};
use anyhow::{Context, Result};
use clap::Parser;

pub mod cli;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config puis appliquer les overrides CLI
    let config = apply_overrides(&cli, resolve_config(&cli)?)?;
    log::debug!("Configuration : {config:?}");

    // 4. Charger l'image (échec = aucune sortie)
    let art = AsciiArt::open(&cli.image, config)?;

    // 5. Rendu vers la destination choisie
    if let Some(ref dir) = cli.output {
        let path = art.print_to_file(dir)?;
        log::info!("Art ASCII écrit dans {}", path.display());
    } else if cli.page {
        art.write_to(Target::Page, &CrosstermTerminal, &mut StdoutSink)?;
    } else {
        art.print_to_terminal()?;
    }
    Ok(())
}

/// Resolve config: `--config` file if present, defaults otherwise.
fn resolve_config(cli: &cli::Cli) -> Result<RenderConfig> {
    if cli.config.exists() {
        load_config(&cli.config)
    } else {
        log::debug!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(RenderConfig::default())
    }
}

/// CLI flags win over the config file.
fn apply_overrides(cli: &cli::Cli, mut config: RenderConfig) -> Result<RenderConfig> {
    if let Some(ref mode) = cli.mode {
        config.mode = BrightnessMode::from_name(mode);
    }
    if cli.invert {
        config.invert = true;
    }
    if let Some(v) = cli.x_scale {
        config.x_scale = v;
    }
    if let Some(v) = cli.y_scale {
        config.y_scale = v;
    }
    if let Some(ref name) = cli.charset {
        config.ramp = GlyphRamp::preset(name).with_context(|| {
            format!("Charset inconnu : {name}. Disponibles : compact, standard, classic")
        })?;
    }
    if let Some(ref glyphs) = cli.ramp {
        config.ramp = GlyphRamp::new(glyphs).context("--ramp")?;
    }
    config.clamp_all();
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> cli::Cli {
        let mut full = vec!["asciigram", "img.png", "--config", "/nonexistent/asciigram.toml"];
        full.extend_from_slice(args);
        cli::Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn defaults_without_flags() {
        let cli = parse(&[]);
        let config = apply_overrides(&cli, resolve_config(&cli).unwrap()).unwrap();
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn flags_override_config() {
        let cli = parse(&["--mode", "lightness", "--invert", "--x-scale", "2", "--charset", "standard"]);
        let config = apply_overrides(&cli, RenderConfig::default()).unwrap();
        assert_eq!(config.mode, BrightnessMode::Lightness);
        assert!(config.invert);
        assert_eq!(config.x_scale, 2);
        assert_eq!(config.ramp.len(), 70);
    }

    #[test]
    fn unknown_mode_flag_is_average() {
        let cli = parse(&["--mode", "ave"]);
        let config = apply_overrides(&cli, RenderConfig::default()).unwrap();
        assert_eq!(config.mode, BrightnessMode::Average);
    }

    #[test]
    fn bad_ramp_or_charset_is_an_error() {
        assert!(apply_overrides(&parse(&["--ramp", ""]), RenderConfig::default()).is_err());
        assert!(apply_overrides(&parse(&["--charset", "emoji"]), RenderConfig::default()).is_err());
    }

    #[test]
    fn zero_scale_flag_is_clamped() {
        let cli = parse(&["--y-scale", "0"]);
        let config = apply_overrides(&cli, RenderConfig::default()).unwrap();
        assert_eq!(config.y_scale, 1);
    }
}
