use std::io::IsTerminal;

use ag_core::config::GridSize;
use ag_core::error::CoreError;
use ag_core::traits::TerminalSize;
use anyhow::Result;

/// Taille du terminal interrogée via crossterm à chaque appel.
///
/// Reports [`CoreError::TerminalUnavailable`] when stdout is not a terminal
/// (pipe, redirection) or the query itself fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct CrosstermTerminal;

impl TerminalSize for CrosstermTerminal {
    fn query(&self) -> Result<GridSize> {
        if !std::io::stdout().is_terminal() {
            return Err(CoreError::TerminalUnavailable("sortie redirigée".into()).into());
        }
        let (cols, rows) = crossterm::terminal::size()
            .map_err(|e| CoreError::TerminalUnavailable(e.to_string()))?;
        Ok(GridSize {
            rows: u32::from(rows),
            cols: u32::from(cols),
        })
    }
}

/// Terminal de taille fixe.
///
/// # Example
/// ```
/// use ag_core::config::GridSize;
/// use ag_core::traits::TerminalSize;
/// use ag_render::terminal::FixedTerminal;
/// let term = FixedTerminal(GridSize { rows: 24, cols: 80 });
/// assert_eq!(term.query().unwrap().cols, 80);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FixedTerminal(pub GridSize);

impl TerminalSize for FixedTerminal {
    fn query(&self) -> Result<GridSize> {
        Ok(self.0)
    }
}
