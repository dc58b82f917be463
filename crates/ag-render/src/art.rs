use std::path::{Path, PathBuf};

use ag_ascii::{AsciiRenderer, Rows};
use ag_core::config::{OUTPUT_FILE_NAME, RenderConfig};
use ag_core::frame::FrameBuffer;
use ag_core::traits::{LineSink, TerminalSize};
use ag_source::image::load_image;
use ag_source::resize::Resizer;
use anyhow::Result;

use crate::sink::{FileSink, StdoutSink};
use crate::terminal::CrosstermTerminal;

/// Grille cible d'un rendu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Target {
    /// Live terminal size, with the fallback grid when unavailable.
    #[default]
    Terminal,
    /// Fixed 150×150 page.
    Page,
}

/// Une image chargée, prête à être rendue autant de fois que nécessaire.
///
/// Each render rescales and rescans the loaded image; the image itself is
/// never modified.
///
/// # Example
/// ```
/// use ag_core::config::RenderConfig;
/// use ag_core::frame::FrameBuffer;
/// use ag_render::art::{AsciiArt, Target};
/// use ag_render::sink::VecSink;
/// use ag_render::terminal::FixedTerminal;
/// use ag_core::config::PAGE_TARGET;
///
/// let frame = FrameBuffer::from_rgb_rows(&[vec![(0, 0, 0), (255, 255, 255)]]).unwrap();
/// let art = AsciiArt::from_frame(frame, RenderConfig::default().with_scale(1, 1));
/// let mut sink = VecSink::default();
/// art.write_to(Target::Page, &FixedTerminal(PAGE_TARGET), &mut sink).unwrap();
/// assert_eq!(sink.lines, vec![" @"]);
/// ```
pub struct AsciiArt {
    image: FrameBuffer,
    renderer: AsciiRenderer,
}

impl AsciiArt {
    /// Load the image at `path`.
    ///
    /// # Errors
    /// Returns an error if the image is missing or cannot be decoded; no
    /// `AsciiArt` exists in that case, so nothing can be rendered.
    pub fn open(path: &Path, config: RenderConfig) -> Result<Self> {
        let image = load_image(path)?;
        Ok(Self::from_frame(image, config))
    }

    /// Wrap an already decoded image.
    #[must_use]
    pub fn from_frame(image: FrameBuffer, config: RenderConfig) -> Self {
        Self {
            image,
            renderer: AsciiRenderer::new(config),
        }
    }

    /// The loaded image, at its original size.
    #[must_use]
    pub fn image(&self) -> &FrameBuffer {
        &self.image
    }

    /// Configuration of every render pass.
    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        self.renderer.config()
    }

    /// Row sequence for `target`, querying `terminal` when needed.
    ///
    /// # Errors
    /// Returns an error if the image is empty or the resize fails.
    pub fn rows(&self, target: Target, terminal: &dyn TerminalSize) -> Result<Rows> {
        let mut scaler = Resizer::new();
        match target {
            Target::Terminal => self
                .renderer
                .render_to_terminal(&self.image, terminal, &mut scaler),
            Target::Page => self.renderer.render_to_page(&self.image, &mut scaler),
        }
    }

    /// Render for `target` and stream the rows into `sink`.
    /// Returns the number of rows written.
    ///
    /// # Errors
    /// Returns an error if rendering or writing fails.
    pub fn write_to(
        &self,
        target: Target,
        terminal: &dyn TerminalSize,
        sink: &mut dyn LineSink,
    ) -> Result<usize> {
        let mut rows = self.rows(target, terminal)?;
        sink.write_lines(&mut rows)
    }

    /// Render to fit the terminal and print one line per row on stdout.
    ///
    /// # Errors
    /// Returns an error if rendering or writing fails.
    pub fn print_to_terminal(&self) -> Result<usize> {
        self.write_to(Target::Terminal, &CrosstermTerminal, &mut StdoutSink)
    }

    /// Render for the page target into `<directory>/ascii_art.txt`,
    /// overwriting any existing file. Returns the written path.
    ///
    /// # Errors
    /// Returns an error if rendering fails or the file cannot be written.
    pub fn print_to_file(&self, directory: &Path) -> Result<PathBuf> {
        let mut sink = FileSink::new(directory.join(OUTPUT_FILE_NAME));
        self.write_to(Target::Page, &CrosstermTerminal, &mut sink)?;
        Ok(sink.path().to_path_buf())
    }
}
