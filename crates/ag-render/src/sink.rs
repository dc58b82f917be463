use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use ag_core::traits::LineSink;
use anyhow::{Context, Result};

fn write_all(
    writer: &mut impl Write,
    lines: &mut dyn Iterator<Item = String>,
) -> io::Result<usize> {
    let mut count = 0;
    for line in lines {
        writeln!(writer, "{line}")?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// Écrit chaque ligne sur la sortie standard.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn write_lines(&mut self, lines: &mut dyn Iterator<Item = String>) -> Result<usize> {
        let mut out = BufWriter::new(io::stdout().lock());
        write_all(&mut out, lines).context("Écriture sur stdout impossible")
    }
}

/// Écrit chaque ligne suivie d'un saut de ligne dans un fichier.
///
/// The file is created on the first `write_lines` call, replacing any
/// previous content.
#[derive(Clone, Debug)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Sink writing to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Destination path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSink for FileSink {
    fn write_lines(&mut self, lines: &mut dyn Iterator<Item = String>) -> Result<usize> {
        let file = File::create(&self.path)
            .with_context(|| format!("Impossible de créer {}", self.path.display()))?;
        let mut out = BufWriter::new(file);
        let count = write_all(&mut out, lines)
            .with_context(|| format!("Écriture dans {} impossible", self.path.display()))?;
        log::info!("{count} lignes écrites dans {}", self.path.display());
        Ok(count)
    }
}

/// Collecte les lignes en mémoire.
///
/// # Example
/// ```
/// use ag_core::traits::LineSink;
/// use ag_render::sink::VecSink;
/// let mut sink = VecSink::default();
/// let n = sink.write_lines(&mut ["a".to_string(), "b".to_string()].into_iter()).unwrap();
/// assert_eq!(n, 2);
/// assert_eq!(sink.lines, vec!["a", "b"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct VecSink {
    /// Lines received so far, in order.
    pub lines: Vec<String>,
}

impl LineSink for VecSink {
    fn write_lines(&mut self, lines: &mut dyn Iterator<Item = String>) -> Result<usize> {
        let before = self.lines.len();
        self.lines.extend(lines);
        Ok(self.lines.len() - before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(v: &[&str]) -> Vec<String> {
        v.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn file_sink_terminates_every_line() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new(dir.path().join("out.txt"));
        let n = sink.write_lines(&mut lines(&["ab", "cd"]).into_iter()).unwrap();
        assert_eq!(n, 2);
        assert_eq!(std::fs::read_to_string(sink.path()).unwrap(), "ab\ncd\n");
    }

    #[test]
    fn file_sink_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "old content\nthat is longer\n").unwrap();
        FileSink::new(&path)
            .write_lines(&mut lines(&["new"]).into_iter())
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn file_sink_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new(dir.path().join("nope").join("out.txt"));
        assert!(sink.write_lines(&mut lines(&["x"]).into_iter()).is_err());
    }

    #[test]
    fn vec_sink_appends() {
        let mut sink = VecSink::default();
        sink.write_lines(&mut lines(&["a"]).into_iter()).unwrap();
        let n = sink.write_lines(&mut lines(&["b", "c"]).into_iter()).unwrap();
        assert_eq!(n, 2);
        assert_eq!(sink.lines, lines(&["a", "b", "c"]));
    }
}
