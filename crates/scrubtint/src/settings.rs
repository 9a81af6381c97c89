#![forbid(unsafe_code)]

//! Contracts implemented by the host application.
//!
//! Persistence and user notification stay host-owned: this crate only
//! reads settings once at startup and emits a single fire-and-forget
//! warning when the stored color fails to parse. Both traits take `&self`
//! so hosts can back them with their usual interior-mutable stores.

/// Key of the boolean that enables custom seekbar coloring.
pub const CUSTOM_COLOR_KEY: &str = "seekbar_custom_color";

/// Key of the stored custom color string (`#RRGGBB` or `#AARRGGBB`).
pub const CUSTOM_COLOR_VALUE_KEY: &str = "seekbar_custom_color_value";

/// Key of the boolean that hides the thumbnail seekbar entirely.
pub const HIDE_THUMBNAIL_KEY: &str = "seekbar_thumbnail_hidden";

/// Read/reset access to the host's persisted settings.
pub trait SettingsStore {
    /// Current value of a boolean setting.
    fn bool_setting(&self, key: &str) -> bool;

    /// Current value of a string setting.
    fn string_setting(&self, key: &str) -> String;

    /// Restore a string setting to its built-in default value.
    fn reset_string_setting(&self, key: &str);
}

/// User-visible, fire-and-forget notifications (e.g. a toast).
pub trait Notifier {
    /// Show a short message to the user. The return value is never
    /// consulted; failures stay inside the host.
    fn notify_user(&self, message: &str);
}
