use ag_core::config::GridSize;
use ag_core::error::CoreError;

/// Taille en cellules de caractères avant réduction.
///
/// # Example
/// ```
/// use ag_ascii::fit::effective_size;
/// assert_eq!(effective_size(640, 480, 1, 2), (640, 240));
/// ```
#[must_use]
pub fn effective_size(width: u32, height: u32, x_scale: u32, y_scale: u32) -> (u32, u32) {
    (width / x_scale.max(1), height / y_scale.max(1))
}

/// Integer divisor applied to both effective dimensions so the image fits
/// inside `target` with its aspect ratio preserved.
///
/// Returns 1 when the image already fits. Otherwise the image is fitted to
/// whichever axis binds, and the divisor is rounded up so truncation can
/// never overflow the grid.
///
/// # Errors
/// Returns [`CoreError::InvalidDimensions`] if `target` has a zero dimension.
///
/// # Example
/// ```
/// use ag_ascii::fit::fit_divisor;
/// use ag_core::config::GridSize;
/// let target = GridSize { rows: 50, cols: 100 };
/// assert_eq!(fit_divisor(400, 100, target).unwrap(), 4);
/// assert_eq!(fit_divisor(80, 40, target).unwrap(), 1);
/// ```
pub fn fit_divisor(
    effective_width: u32,
    effective_height: u32,
    target: GridSize,
) -> Result<u32, CoreError> {
    if target.is_degenerate() {
        return Err(CoreError::InvalidDimensions {
            width: target.cols,
            height: target.rows,
        });
    }
    if effective_width <= target.cols && effective_height <= target.rows {
        return Ok(1);
    }

    let width = f64::from(effective_width.max(1));
    let height = f64::from(effective_height.max(1));
    let cols = f64::from(target.cols);
    let rows = f64::from(target.rows);
    let aspect = width / height;

    // (width, height) of each candidate that fits the grid
    let mut chosen: Option<(f64, f64)> = None;

    let by_width = (cols, cols / aspect);
    if by_width.1 <= rows {
        chosen = Some(by_width);
    }

    let by_height = (aspect * rows, rows);
    if by_height.0 <= cols && chosen.is_none_or(|(_, h)| by_height.1 > h) {
        chosen = Some(by_height);
    }

    let axis_bound = (width / cols).ceil().max((height / rows).ceil());
    let divisor = match chosen {
        Some((candidate_width, _)) => (width / candidate_width).ceil().max(axis_bound),
        None => axis_bound,
    };

    Ok((divisor as u32).max(1))
}

/// Dimensions of the image after dividing the effective size by `divisor`.
/// Never returns a zero dimension.
#[must_use]
pub fn scaled_size(effective_width: u32, effective_height: u32, divisor: u32) -> (u32, u32) {
    let divisor = divisor.max(1);
    (
        (effective_width / divisor).max(1),
        (effective_height / divisor).max(1),
    )
}
