//! Overall dimensions of the connector, for sizing the parts it is cut into.
//!
//! These are closed-form and must agree with the geometry built in
//! [`crate::snap::clip`]: the bounding box of each generated solid is exactly
//! what these functions return.

use crate::float_types::{Real, SQRT_2};

/// Ratio between the straight gap `g` and the extra half-width it costs on a
/// 45° flank: `g√2` horizontally plus `g` from raising the roof.
pub const DIAGONAL_GAP_FACTOR: Real = 1.0 + SQRT_2;

/// Height from the mating face to the top of the spring.
pub fn clip_height(t: Real, w: Real, s: Real) -> Real {
    w / 2.0 - t / 2.0 + s
}

/// Widest extent of the female channel.
pub fn channel_width(w: Real, g: Real) -> Real {
    2.0 * g * DIAGONAL_GAP_FACTOR + w
}

/// Length of the female part along the channel, latch pocket included.
pub fn female_length(w: Real, t: Real, g: Real, j: Real, h: Real, l: Real, s: Real) -> Real {
    clip_height(t, w, s) + h + g + j + l
}

/// Height of the room above the spring that lets it lift clear of the male.
pub fn cavity_height(t: Real, w: Real, g: Real) -> Real {
    w / 2.0 - t / 2.0 + g
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_preset_dimensions() {
        assert!((clip_height(1.75, 5.25, 1.0) - 2.75).abs() < 1e-12);
        assert!((channel_width(5.25, 0.3) - 6.698528137423857).abs() < 1e-12);
        assert!((female_length(5.25, 1.75, 0.3, 0.6, 1.0, 7.0, 1.0) - 11.65).abs() < 1e-12);
    }
}
