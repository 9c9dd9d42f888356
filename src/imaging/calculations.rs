//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

use super::backend::Dimensions;

/// Width at which an unset height is inferred from the source aspect ratio.
pub const DEFAULT_WIDTH: u32 = 400;

/// Resolve the output dimensions for a resize.
///
/// Height is inferred only when it is unset *and* the width is exactly
/// [`DEFAULT_WIDTH`]: `round(DEFAULT_WIDTH / src_w * src_h)`, never below 1.
/// Every other combination passes through untouched, so an explicit height
/// stretches the image even if the aspect ratio changes.
///
/// Returns `None` when the height is still unset after resolution (unset
/// height with a non-default width); there is nothing to scale to.
///
/// # Examples
/// ```
/// # use imgshrink::imaging::{resolve_dimensions, Dimensions};
/// let source = Dimensions { width: 800, height: 600 };
/// assert_eq!(
///     resolve_dimensions(400, None, source),
///     Some(Dimensions { width: 400, height: 300 })
/// );
/// assert_eq!(
///     resolve_dimensions(400, Some(50), source),
///     Some(Dimensions { width: 400, height: 50 })
/// );
/// assert_eq!(resolve_dimensions(640, None, source), None);
/// ```
pub fn resolve_dimensions(
    width: u32,
    height: Option<u32>,
    source: Dimensions,
) -> Option<Dimensions> {
    match height {
        Some(height) => Some(Dimensions { width, height }),
        None if width == DEFAULT_WIDTH => Some(Dimensions {
            width,
            height: infer_height(source),
        }),
        None => None,
    }
}

fn infer_height(source: Dimensions) -> u32 {
    if source.width == 0 {
        return 1;
    }
    let height = DEFAULT_WIDTH as f64 / source.width as f64 * source.height as f64;
    (height.round() as u32).max(1)
}
