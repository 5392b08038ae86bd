//! Numeric helpers shared by the layout passes.

/// Layout units per CSS pixel.
const LAYOUT_UNITS_PER_PX: f32 = 64.0;

/// CSS `clamp(min, value, max)`: the minimum wins when the bounds cross.
#[inline]
pub fn css_clamp(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

/// Quantize a CSS pixel value to the layout unit (1/64 px) to match Chromium's subpixel model.
#[inline]
pub fn snap_to_layout_unit(value: f32) -> f32 {
    if value.is_finite() {
        (value * LAYOUT_UNITS_PER_PX).round() / LAYOUT_UNITS_PER_PX
    } else {
        value
    }
}
