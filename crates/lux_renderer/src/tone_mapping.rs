//! Global linear tone mapping.
//!
//! Radiance is divided by the largest channel value found anywhere in the
//! image, so nothing clips and relative brightness between pixels is kept.
//! The maximum starts at 1.0 so that images already in range are left as
//! they are.

use crate::Color;
use lux_math::{max_component, Interval};

/// Starting value of the running maximum.
pub const MAX_VALUE_SEED: f32 = 1.0;

/// Fold one color into the running maximum channel value.
#[inline]
pub fn accumulate_max(max_value: f32, color: Color) -> f32 {
    max_value.max(max_component(color))
}

/// Maximum channel value over `colors`, seeded at [`MAX_VALUE_SEED`].
pub fn max_radiance(colors: &[Color]) -> f32 {
    colors.iter().fold(MAX_VALUE_SEED, |max, c| accumulate_max(max, *c))
}

/// Map a linear color to 8-bit RGB by dividing by `max_value`.
///
/// Channels are clamped to [0, 1] after the division and truncated after
/// scaling by 255.
pub fn linear_tone_map(color: Color, max_value: f32) -> [u8; 3] {
    let scaled = color / max_value;
    let quantize = |c: f32| (Interval::UNIT.clamp(c) * 255.0) as u8;
    [quantize(scaled.x), quantize(scaled.y), quantize(scaled.z)]
}

/// Tone map a whole image into a packed row-major RGB8 buffer.
pub fn tone_map_pixels(pixels: &[Color], max_value: f32) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(pixels.len() * 3);
    for color in pixels {
        bytes.extend_from_slice(&linear_tone_map(*color, max_value));
    }
    bytes
}
