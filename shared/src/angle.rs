use std::f64::consts::{FRAC_PI_2, TAU};

/// Angle of the fixed pointer, straight up in canvas coordinates.
pub const POINTER_ANGLE: f64 = -FRAC_PI_2;

/// Wraps any angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = ((angle % TAU) + TAU) % TAU;
    // (-ε % TAU) + TAU can round up to exactly TAU
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Angular width of one segment on a wheel with `count` segments.
pub fn slice_angle(count: usize) -> f64 {
    TAU / count.max(1) as f64
}

/// Index of the segment sitting under the pointer when the wheel rests at `rotation`.
///
/// Segment `i` covers `[rotation + i * slice, rotation + (i + 1) * slice)`, so the pointer
/// falls into the segment whose span contains `POINTER_ANGLE` modulo a full turn.
pub fn segment_at_pointer(rotation: f64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let relative = normalize_angle(POINTER_ANGLE - rotation);
    let index = (relative / slice_angle(count)).floor() as usize;
    Some(index.min(count - 1))
}
