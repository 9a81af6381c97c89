#![forbid(unsafe_code)]

//! Delta-preserving seekbar recoloring for a host player pipeline.
//!
//! # Role
//! The host renders its seek indicator with a fixed set of stock colors
//! and gradients, shifting their brightness and alpha per UI state
//! (pressed, buffered, hover). This crate recognizes those stock values
//! and swaps in a user-chosen color while keeping each state's offset,
//! so the substituted seekbar still reads pressed as pressed and dimmed
//! as dimmed.
//!
//! # This crate provides
//! - [`Color`] / [`Hsv`] packed-ARGB primitives with the conversions and
//!   clamps the engine needs.
//! - [`BASELINE`], the stock values the host is known to emit.
//! - [`TintConfig`], the one-time configuration with bounded fallback
//!   for invalid stored colors.
//! - The render-path entry points in [`engine`], all gate-checked and
//!   failure-absorbing.
//! - [`StyleKey`] quantization for selecting one of 512 pre-built splash
//!   style variants.
//!
//! # How it fits in the system
//! The host pipeline calls the [`engine`] and [`splash`] entry points
//! from fixed render-path locations. Settings storage, user
//! notification, and resource lookup stay host-owned behind the traits
//! in [`settings`] and [`splash`]; logging goes through `tracing`. Every
//! entry point is a pure function of the configuration and its inputs,
//! safe to call from concurrent render threads once the configuration is
//! built, and an unthemed render is always the worst case.

/// Stock reference values recognized by the engine.
pub mod baseline;
/// Packed ARGB colors, HSV decomposition, clamps, and quantization.
pub mod color;
/// One-time configuration: feature gate and effective color.
pub mod config;
/// The color-substitution engine and its render-path entry points.
pub mod engine;
/// Contracts implemented by the host application.
pub mod settings;
/// Splash-asset style selection keyed by quantized color.
pub mod splash;

pub use baseline::{BASELINE, Baseline};
pub use color::{
    Color, ColorParseError, Hsv, clamp_f32, clamp_i32, quantize_channel_to_3_bits,
};
pub use config::{ConfigError, TintConfig};
pub use engine::{
    SubstituteError, Substitution, alternate_splash_enabled, linear_gradient,
    player_seekbar_clicked_color, player_seekbar_color, seekbar_gradient_enabled, substitute,
    thumbnail_seekbar_color,
};
pub use settings::{
    CUSTOM_COLOR_KEY, CUSTOM_COLOR_VALUE_KEY, HIDE_THUMBNAIL_KEY, Notifier, SettingsStore,
};
pub use splash::{
    ResourceId, ResourceResolver, STYLE_IDENTIFIER_PREFIX, SplashError, StyleKey, ThemedAsset,
    theme_splash_asset, try_theme_splash_asset,
};
