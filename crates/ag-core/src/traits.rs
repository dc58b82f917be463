use anyhow::Result;

use crate::config::GridSize;
use crate::frame::FrameBuffer;

/// Fournit la taille courante du terminal.
///
/// Implémenté par : `CrosstermTerminal`, `FixedTerminal`.
///
/// # Example
/// ```
/// use ag_core::traits::TerminalSize;
/// use ag_core::config::GridSize;
///
/// struct Tiny;
/// impl TerminalSize for Tiny {
///     fn query(&self) -> anyhow::Result<GridSize> { Ok(GridSize { rows: 2, cols: 4 }) }
/// }
/// assert_eq!(Tiny.query().unwrap().cols, 4);
/// ```
pub trait TerminalSize {
    /// Current size in rows × columns. May change from call to call.
    ///
    /// # Errors
    /// Fails when no terminal is attached (redirected output, CI).
    fn query(&self) -> Result<GridSize>;
}

/// Redimensionne une image.
///
/// # Example
/// ```
/// use ag_core::traits::Scaler;
/// use ag_core::frame::FrameBuffer;
///
/// struct Blank;
/// impl Scaler for Blank {
///     fn resize(&mut self, _src: &FrameBuffer, w: u32, h: u32) -> anyhow::Result<FrameBuffer> {
///         Ok(FrameBuffer::new(w, h))
///     }
/// }
/// ```
pub trait Scaler {
    /// Return a resized copy of `src`; `src` is left untouched.
    ///
    /// # Errors
    /// Returns an error if the resize operation fails.
    fn resize(&mut self, src: &FrameBuffer, width: u32, height: u32) -> Result<FrameBuffer>;
}

/// Destination des lignes rendues.
///
/// Implémenté par : `StdoutSink`, `FileSink`, `VecSink`.
pub trait LineSink {
    /// Consume `lines`, writing each one followed by a newline.
    /// Returns the number of lines written.
    ///
    /// # Errors
    /// Returns an error if the underlying writer fails.
    fn write_lines(&mut self, lines: &mut dyn Iterator<Item = String>) -> Result<usize>;
}
