use ag_core::config::BrightnessMode;

/// Luminosité d'un pixel selon `mode`.
///
/// # Example
/// ```
/// use ag_ascii::brightness::brightness;
/// use ag_core::config::BrightnessMode;
/// assert_eq!(brightness((123, 34, 211), BrightnessMode::Average), 122);
/// assert_eq!(brightness((123, 34, 211), BrightnessMode::Lightness), 122);
/// assert_eq!(brightness((123, 34, 211), BrightnessMode::Luminosity), 65);
/// ```
#[inline(always)]
#[must_use]
pub fn brightness(pixel: (u8, u8, u8), mode: BrightnessMode) -> u8 {
    match mode {
        BrightnessMode::Average => average(pixel),
        BrightnessMode::Lightness => lightness(pixel),
        BrightnessMode::Luminosity => luminosity(pixel),
    }
}

/// `(r + g + b) / 3`, floor division.
#[inline(always)]
#[must_use]
pub fn average((r, g, b): (u8, u8, u8)) -> u8 {
    ((u32::from(r) + u32::from(g) + u32::from(b)) / 3) as u8
}

/// `(max + min) / 2`, floor division.
#[inline(always)]
#[must_use]
pub fn lightness((r, g, b): (u8, u8, u8)) -> u8 {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    ((u16::from(max) + u16::from(min)) / 2) as u8
}

/// `0.21 r + 0.72 g + 0.07 b`, truncated.
///
/// Computed in integer hundredths so that grey pixels map exactly to their
/// own value.
#[inline(always)]
#[must_use]
pub fn luminosity((r, g, b): (u8, u8, u8)) -> u8 {
    ((u32::from(r) * 21 + u32::from(g) * 72 + u32::from(b) * 7) / 100) as u8
}
