#![forbid(unsafe_code)]

//! Reference values the host pipeline is known to emit by default.
//!
//! The substitution engine is a targeted override, not a general recolor
//! filter: it only ever rewrites values that match these constants
//! exactly (or, for the player call site, brightness/alpha variants of
//! the reference solid).

use crate::color::Color;

/// The fixed reference values recognized by the substitution engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    /// Solid color of the unthemed seek indicator.
    pub reference_solid: Color,
    /// Colors of the unthemed two-stop seekbar gradient.
    pub gradient_colors: [Color; 2],
    /// Stop positions of the gradient, non-decreasing in `[0, 1]`.
    pub gradient_positions: [f32; 2],
    /// HSV value channel of `reference_solid`, precomputed.
    pub solid_brightness: f32,
}

/// The reference values recognized by this crate.
///
/// `solid_brightness` is pinned against [`Color::to_hsv`] by a unit test.
pub const BASELINE: Baseline = Baseline {
    reference_solid: Color::from_bits(0xFFFF_0000),
    gradient_colors: [Color::from_bits(0xFFFF_0033), Color::from_bits(0xFFFF_2791)],
    gradient_positions: [0.8, 1.0],
    solid_brightness: 1.0,
};
