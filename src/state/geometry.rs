use crate::model::{Origin, Rect};

/// Maps a viewport pointer onto `bounds`, saturating at the edges.
/// `None` when the surface has no usable size; callers keep the previous origin.
pub fn compute_origin(bounds: Rect, pointer_x: f64, pointer_y: f64) -> Option<Origin> {
    if bounds.is_degenerate() {
        return None;
    }
    let x = ((pointer_x - bounds.left) / bounds.width).clamp(0.0, 1.0);
    let y = ((pointer_y - bounds.top) / bounds.height).clamp(0.0, 1.0);
    if x.is_nan() || y.is_nan() {
        return None;
    }
    Some(Origin { x, y })
}
