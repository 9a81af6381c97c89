#![forbid(unsafe_code)]

//! One-time configuration: the feature gate and the effective color.
//!
//! [`TintConfig`] is built exactly once at startup and passed by
//! reference to every engine and splash operation. Nothing here mutates
//! after construction, so concurrent render threads can share a config
//! without synchronization. There is no runtime re-theming; a settings
//! change takes effect on the next start.

use thiserror::Error;
use tracing::{debug, warn};

use crate::baseline::BASELINE;
use crate::color::{Color, ColorParseError, Hsv};
use crate::settings::{
    CUSTOM_COLOR_KEY, CUSTOM_COLOR_VALUE_KEY, HIDE_THUMBNAIL_KEY, Notifier, SettingsStore,
};

/// Message shown to the user when the stored color string is invalid.
const INVALID_COLOR_MESSAGE: &str = "Invalid custom seekbar color. Reverting to default.";

/// Errors raised while building a [`TintConfig`].
///
/// Only the unrecoverable case surfaces: an invalid *stored* value is
/// absorbed by the reset-and-retry path, so an error here means the
/// store's own default is broken and startup must not continue silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The default color value failed to parse after a reset.
    #[error("default color value {value:?} is invalid: {source}")]
    InvalidDefault {
        /// The string the store returned after the reset.
        value: String,
        /// The parse failure for that string.
        #[source]
        source: ColorParseError,
    },
}

/// The effective custom-color configuration.
///
/// When the feature gate is closed the effective color is the reference
/// solid and the HSV cache is all zeros; the cache is never consulted in
/// that state.
#[derive(Debug, Clone, PartialEq)]
pub struct TintConfig {
    enabled: bool,
    hide_thumbnail: bool,
    color: Color,
    color_hsv: Hsv,
}

impl TintConfig {
    /// Configuration with the gate closed: every operation passes its
    /// input through unchanged.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            hide_thumbnail: false,
            color: BASELINE.reference_solid,
            color_hsv: Hsv::ZERO,
        }
    }

    /// Configuration with the gate open and the given effective color.
    /// Bypasses the settings store; hosts that configure programmatically
    /// (and tests) build configs this way.
    #[must_use]
    pub fn with_color(color: Color) -> Self {
        Self {
            enabled: true,
            hide_thumbnail: false,
            color,
            color_hsv: color.to_hsv(),
        }
    }

    /// The same configuration with the thumbnail-hide flag set.
    #[must_use]
    pub fn with_hidden_thumbnail(mut self, hidden: bool) -> Self {
        self.hide_thumbnail = hidden;
        self
    }

    /// Build the effective configuration from the host settings store.
    ///
    /// With the feature off this returns the pass-through configuration
    /// without touching the color setting. With the feature on, a stored
    /// color that fails to parse triggers exactly one user notification,
    /// one reset to the store's documented default, and one retry; a
    /// second failure is fatal rather than a loop.
    pub fn load(
        settings: &dyn SettingsStore,
        notifier: &dyn Notifier,
    ) -> Result<Self, ConfigError> {
        let hide_thumbnail = settings.bool_setting(HIDE_THUMBNAIL_KEY);
        if !settings.bool_setting(CUSTOM_COLOR_KEY) {
            return Ok(Self {
                hide_thumbnail,
                ..Self::disabled()
            });
        }

        let raw = settings.string_setting(CUSTOM_COLOR_VALUE_KEY);
        let color = match Color::parse(&raw) {
            Ok(color) => color,
            Err(err) => {
                warn!(value = %raw, error = %err, "invalid custom seekbar color, resetting");
                notifier.notify_user(INVALID_COLOR_MESSAGE);
                settings.reset_string_setting(CUSTOM_COLOR_VALUE_KEY);
                let fallback = settings.string_setting(CUSTOM_COLOR_VALUE_KEY);
                Color::parse(&fallback).map_err(|source| ConfigError::InvalidDefault {
                    value: fallback,
                    source,
                })?
            }
        };

        debug!(color = %color, hide_thumbnail, "custom seekbar color loaded");
        Ok(Self {
            enabled: true,
            hide_thumbnail,
            color,
            color_hsv: color.to_hsv(),
        })
    }

    /// Whether custom-color substitution is active.
    #[inline]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the thumbnail seekbar should be hidden.
    #[inline]
    pub const fn hides_thumbnail(&self) -> bool {
        self.hide_thumbnail
    }

    /// The effective color: the user's choice, or the reference solid
    /// while the gate is closed.
    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Cached HSV decomposition of the effective color.
    #[inline]
    pub const fn color_hsv(&self) -> Hsv {
        self.color_hsv
    }
}

impl Default for TintConfig {
    fn default() -> Self {
        Self::disabled()
    }
}
