use crate::error::CoreError;

/// Buffer de pixels d'une image chargée ou redimensionnée.
///
/// Stocke les pixels en RGBA row-major, 4 bytes par pixel. L'alpha est
/// conservé pour le resize mais ignoré par le calcul de luminosité.
///
/// # Example
/// ```
/// use ag_core::frame::FrameBuffer;
/// let fb = FrameBuffer::new(10, 10);
/// assert_eq!(fb.data.len(), 400);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    /// Pixels RGBA, row-major, 4 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameBuffer {
    /// Crée un buffer noir opaque aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use ag_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(100, 50);
    /// assert_eq!(fb.width, 100);
    /// assert_eq!(fb.height, 50);
    /// assert_eq!(fb.data.len(), 100 * 50 * 4);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let mut data = vec![0u8; width as usize * height as usize * 4];
        for px in data.chunks_exact_mut(4) {
            px[3] = 255;
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Build an opaque buffer from rows of RGB triples.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] if the rows are ragged.
    ///
    /// # Example
    /// ```
    /// use ag_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::from_rgb_rows(&[
    ///     vec![(255, 0, 0), (0, 255, 0)],
    ///     vec![(0, 0, 255), (9, 9, 9)],
    /// ]).unwrap();
    /// assert_eq!(fb.rgb(1, 1), (9, 9, 9));
    /// ```
    pub fn from_rgb_rows(rows: &[Vec<(u8, u8, u8)>]) -> Result<Self, CoreError> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, Vec::len) as u32;
        if rows.iter().any(|row| row.len() as u32 != width) {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        let data = rows
            .iter()
            .flatten()
            .flat_map(|&(r, g, b)| [r, g, b, 255])
            .collect();
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Accès au pixel (x, y) → (r, g, b, a).
    ///
    /// # Example
    /// ```
    /// use ag_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(10, 10);
    /// assert_eq!(fb.pixel(0, 0), (0, 0, 0, 255));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        if idx + 3 >= self.data.len() {
            return (0, 0, 0, 0);
        }
        (
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        )
    }

    /// Accès au pixel (x, y) sans alpha.
    #[inline(always)]
    #[must_use]
    pub fn rgb(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let (r, g, b, _) = self.pixel(x, y);
        (r, g, b)
    }

    /// All pixels as RGB triples in row-major order.
    ///
    /// # Example
    /// ```
    /// use ag_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(3, 2);
    /// assert_eq!(fb.pixels().count(), 6);
    /// ```
    pub fn pixels(&self) -> impl Iterator<Item = (u8, u8, u8)> + '_ {
        self.data.chunks_exact(4).map(|px| (px[0], px[1], px[2]))
    }

    /// Pixels of row `y` as RGB triples, left to right.
    pub fn row(&self, y: u32) -> impl Iterator<Item = (u8, u8, u8)> + '_ {
        let stride = self.width as usize * 4;
        let start = (y as usize * stride).min(self.data.len());
        let end = (start + stride).min(self.data.len());
        self.data[start..end]
            .chunks_exact(4)
            .map(|px| (px[0], px[1], px[2]))
    }

    /// `true` if the image has no pixels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_rows_are_rejected() {
        let rows = vec![vec![(0, 0, 0); 2], vec![(0, 0, 0); 3]];
        assert!(FrameBuffer::from_rgb_rows(&rows).is_err());
    }

    #[test]
    fn pixels_are_row_major() {
        let fb = FrameBuffer::from_rgb_rows(&[vec![(1, 1, 1), (2, 2, 2)], vec![(3, 3, 3), (4, 4, 4)]])
            .unwrap();
        let firsts: Vec<u8> = fb.pixels().map(|(r, _, _)| r).collect();
        assert_eq!(firsts, vec![1, 2, 3, 4]);
        let second_row: Vec<u8> = fb.row(1).map(|(r, _, _)| r).collect();
        assert_eq!(second_row, vec![3, 4]);
    }

    #[test]
    fn empty_buffer() {
        let fb = FrameBuffer::from_rgb_rows(&[]).unwrap();
        assert!(fb.is_empty());
        assert_eq!(fb.pixels().count(), 0);
    }
}
