#![forbid(unsafe_code)]

//! The color-substitution engine.
//!
//! Each public function here is an injection point called from a fixed
//! location in the host render path. All of them check the feature gate
//! first, recognize only the reference values in [`BASELINE`], and absorb
//! their own failures: the worst case is always the unmodified input,
//! never a panic or an error crossing into the host.
//!
//! The central algorithm is the delta-preserving substitution: the host
//! renders the same seekbar color at different brightness and alpha for
//! different UI states (pressed, buffered, hover), and a flat replacement
//! would erase those distinctions. Instead, the replacement keeps the
//! custom color's hue and saturation while re-deriving brightness and
//! alpha from the observed value's offset against the reference solid.

use thiserror::Error;
use tracing::{debug, error};

use crate::baseline::BASELINE;
use crate::color::{Color, Hsv, clamp_f32, clamp_i32};
use crate::config::TintConfig;

/// Error produced inside the substitution math. Absorbed at every public
/// boundary; never reaches the host pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SubstituteError {
    /// The observed color decomposed to a non-finite brightness.
    #[error("observed color decomposed to non-finite brightness {0}")]
    NonFiniteBrightness(f32),
}

/// Outcome of one substitution attempt.
///
/// The non-replacement variants all collapse to the observed input, but
/// stay distinguishable so callers and tests can tell "no-op because the
/// gate is closed" from "no-op because a failure was absorbed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Substitution {
    /// A replacement was computed from the custom color.
    Replaced(Color),
    /// The gate is closed; input flows through untouched.
    Disabled,
    /// The input already equals the effective color; nothing to do.
    Unmatched,
    /// An internal failure was logged and masked.
    Failed,
}

impl Substitution {
    /// Collapse to the value the render path should use.
    #[must_use]
    pub fn color(self, observed: Color) -> Color {
        match self {
            Self::Replaced(replacement) => replacement,
            Self::Disabled | Self::Unmatched | Self::Failed => observed,
        }
    }

    /// Whether a replacement was computed.
    #[must_use]
    pub const fn is_replaced(self) -> bool {
        matches!(self, Self::Replaced(_))
    }
}

/// Delta-preserving substitution of `observed` by the effective color.
///
/// `observed` is expected to be the reference solid or a brightness/alpha
/// variant of it; its offsets against the reference are carried over to
/// the custom color. Idempotent: an input that already equals the
/// effective color is left alone.
pub fn substitute(config: &TintConfig, observed: Color) -> Substitution {
    if !config.is_enabled() {
        return Substitution::Disabled;
    }
    if observed == config.color() {
        return Substitution::Unmatched;
    }
    match delta_substitute(config, observed) {
        Ok(replacement) => {
            debug!(observed = %observed, replacement = %replacement, "substituted seekbar color");
            Substitution::Replaced(replacement)
        }
        Err(err) => {
            error!(observed = %observed, error = %err, "color substitution failed");
            Substitution::Failed
        }
    }
}

fn delta_substitute(config: &TintConfig, observed: Color) -> Result<Color, SubstituteError> {
    let alpha_delta =
        i32::from(observed.alpha()) - i32::from(BASELINE.reference_solid.alpha());

    let observed_hsv = observed.to_hsv();
    let brightness_delta = observed_hsv.v - BASELINE.solid_brightness;
    if !brightness_delta.is_finite() {
        return Err(SubstituteError::NonFiniteBrightness(observed_hsv.v));
    }

    let custom = config.color_hsv();
    let replacement_hsv = Hsv {
        h: custom.h,
        s: custom.s,
        v: clamp_f32(custom.v + brightness_delta, 0.0, 1.0),
    };
    let replacement_alpha =
        clamp_i32(i32::from(config.color().alpha()) + alpha_delta, 0, 255) as u8;

    Ok(Color::from_hsv(replacement_alpha, replacement_hsv))
}

/// Injection point: solid-color override for the thumbnail seekbar.
///
/// Only the exact reference solid is a candidate. When the thumbnail is
/// hidden the match is replaced by fully transparent black; otherwise the
/// delta-preserving substitution applies. Everything else passes through.
#[must_use]
pub fn thumbnail_seekbar_color(config: &TintConfig, observed: Color) -> Color {
    if observed != BASELINE.reference_solid {
        return observed;
    }
    if config.hides_thumbnail() {
        return Color::TRANSPARENT;
    }
    substitute(config, observed).color(observed)
}

/// Injection point: color override for the video player seekbar.
///
/// This call site receives brightness/alpha variants of the reference
/// solid, one per UI state, so the substitution is applied to whatever
/// arrives and each variant keeps its offset.
#[must_use]
pub fn player_seekbar_color(config: &TintConfig, observed: Color) -> Color {
    substitute(config, observed).color(observed)
}

/// Injection point: color override for the clicked player seekbar.
///
/// Exact-match gated like the thumbnail override.
#[must_use]
pub fn player_seekbar_clicked_color(config: &TintConfig, observed: Color) -> Color {
    if observed == BASELINE.reference_solid {
        substitute(config, observed).color(observed)
    } else {
        observed
    }
}

/// Injection point: gradient override, mutating the caller-owned colors
/// in place.
///
/// Most gradient drawing in the host funnels through this hook, so it
/// only acts when both sequences equal the reference gradient
/// element-wise. A match is filled with transparent black (hide mode) or
/// the effective color; positions are never changed. Anything else is
/// left untouched and logged at debug level.
pub fn linear_gradient(config: &TintConfig, colors: &mut [Color], positions: &[f32]) {
    if !config.is_enabled() && !config.hides_thumbnail() {
        return;
    }
    if colors == &BASELINE.gradient_colors[..] && positions == &BASELINE.gradient_positions[..] {
        let fill = if config.hides_thumbnail() {
            Color::TRANSPARENT
        } else {
            config.color()
        };
        colors.fill(fill);
        return;
    }
    debug!(?colors, ?positions, "ignoring gradient that is not the reference seekbar");
}

/// Injection point: whether the player should use its gradient seekbar.
/// Forced off while custom coloring is active; the gradient path would
/// repaint over the substituted color.
#[must_use]
pub fn seekbar_gradient_enabled(config: &TintConfig, original: bool) -> bool {
    if config.is_enabled() { false } else { original }
}

/// Injection point: whether the host should use its alternate animated
/// launch splash screen. Forced off while custom coloring is active so
/// the themable splash variant is used instead.
#[must_use]
pub fn alternate_splash_enabled(config: &TintConfig, original: bool) -> bool {
    debug!(original, "alternate splash screen query");
    if config.is_enabled() { false } else { original }
}
