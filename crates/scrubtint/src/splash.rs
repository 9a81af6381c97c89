#![forbid(unsafe_code)]

//! Splash-asset style selection keyed by quantized color.
//!
//! The launch splash animation is a pre-rendered vector asset embedding
//! several colors, so the seekbar inside it cannot be recolored with a
//! simple color filter without also repainting the rest of the artwork.
//! Instead, the host ships one pre-built style per quantized color key
//! (512 variants) and this module picks the matching one.

use std::fmt;

use thiserror::Error;
use tracing::{debug, error};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::{Color, quantize_channel_to_3_bits};
use crate::config::TintConfig;

/// Prefix of the pre-built style resources, one per quantized color key.
pub const STYLE_IDENTIFIER_PREFIX: &str = "splash_seekbar_color_style";

/// Opaque handle to a host resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceId(pub u32);

/// Errors raised while theming the splash asset. Non-fatal by contract:
/// the public entry point logs and lets the asset render unthemed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplashError {
    /// No style resource exists for the derived key.
    #[error("no style resource named {0:?}")]
    StyleNotFound(String),
}

/// A quantized color key selecting one of the 512 pre-built styles.
///
/// Each channel is the 3-bit quantization of the corresponding 8-bit
/// channel, so every field is in `0..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StyleKey {
    /// Quantized red channel.
    pub r: u8,
    /// Quantized green channel.
    pub g: u8,
    /// Quantized blue channel.
    pub b: u8,
}

impl StyleKey {
    /// Quantize each RGB channel of `color` to 3 bits. Alpha is ignored.
    #[must_use]
    pub fn quantize(color: Color) -> Self {
        Self {
            r: quantize_channel_to_3_bits(color.red()),
            g: quantize_channel_to_3_bits(color.green()),
            b: quantize_channel_to_3_bits(color.blue()),
        }
    }

    /// Name of the pre-built style resource for this key.
    #[must_use]
    pub fn identifier(&self) -> String {
        format!("{STYLE_IDENTIFIER_PREFIX}_{}_{}_{}", self.r, self.g, self.b)
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.r, self.g, self.b)
    }
}

/// Host-owned lookup of named style resources.
pub trait ResourceResolver {
    /// Resolve a style resource by name; `None` means not found.
    fn resolve_style(&self, name: &str) -> Option<ResourceId>;
}

/// A host-owned vector asset whose embedded colors are themed by
/// applying a pre-built style.
pub trait ThemedAsset {
    /// Apply the given style resource to the asset.
    fn apply_style(&mut self, style: ResourceId);
}

/// Injection point: theme the splash asset to the effective color.
///
/// No-op while the gate is closed. Failures (including a missing style
/// resource) are logged and absorbed; the asset then renders unthemed.
pub fn theme_splash_asset<R, A>(config: &TintConfig, resolver: &R, asset: &mut A)
where
    R: ResourceResolver + ?Sized,
    A: ThemedAsset + ?Sized,
{
    if !config.is_enabled() {
        return;
    }
    if let Err(err) = try_theme_splash_asset(config, resolver, asset) {
        error!(error = %err, "splash asset theming skipped");
    }
}

/// Fallible form of [`theme_splash_asset`], without the gate check, so
/// embedders and tests can observe the failure.
pub fn try_theme_splash_asset<R, A>(
    config: &TintConfig,
    resolver: &R,
    asset: &mut A,
) -> Result<(), SplashError>
where
    R: ResourceResolver + ?Sized,
    A: ThemedAsset + ?Sized,
{
    let identifier = StyleKey::quantize(config.color()).identifier();
    debug!(style = %identifier, "applying splash seekbar style");

    let style = resolver
        .resolve_style(&identifier)
        .ok_or(SplashError::StyleNotFound(identifier))?;
    asset.apply_style(style);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct FakeResolver {
        styles: HashMap<String, ResourceId>,
    }

    impl FakeResolver {
        fn empty() -> Self {
            Self {
                styles: HashMap::new(),
            }
        }

        fn with_style(name: &str, id: u32) -> Self {
            let mut styles = HashMap::new();
            styles.insert(name.to_owned(), ResourceId(id));
            Self { styles }
        }
    }

    impl ResourceResolver for FakeResolver {
        fn resolve_style(&self, name: &str) -> Option<ResourceId> {
            self.styles.get(name).copied()
        }
    }

    #[derive(Default)]
    struct FakeAsset {
        applied: Vec<ResourceId>,
    }

    impl ThemedAsset for FakeAsset {
        fn apply_style(&mut self, style: ResourceId) {
            self.applied.push(style);
        }
    }

    #[test]
    fn key_quantizes_each_channel_independently() {
        let key = StyleKey::quantize(Color::rgb(0xFF, 0x00, 0x80));
        assert_eq!(key, StyleKey { r: 7, g: 0, b: 4 });
    }

    #[test]
    fn key_ignores_alpha() {
        let opaque = StyleKey::quantize(Color::rgb(10, 20, 30));
        let translucent = StyleKey::quantize(Color::argb(0, 10, 20, 30));
        assert_eq!(opaque, translucent);
    }

    #[test]
    fn identifier_formats_prefix_and_channels() {
        let key = StyleKey { r: 7, g: 0, b: 4 };
        assert_eq!(key.identifier(), "splash_seekbar_color_style_7_0_4");
    }

    #[test]
    fn known_style_is_applied() {
        let config = TintConfig::with_color(Color::rgb(0xFF, 0x00, 0x80));
        let resolver = FakeResolver::with_style("splash_seekbar_color_style_7_0_4", 42);
        let mut asset = FakeAsset::default();

        theme_splash_asset(&config, &resolver, &mut asset);

        assert_eq!(asset.applied, vec![ResourceId(42)]);
    }

    #[test]
    fn missing_style_is_absorbed() {
        let config = TintConfig::with_color(Color::rgb(0xFF, 0x00, 0x80));
        let resolver = FakeResolver::empty();
        let mut asset = FakeAsset::default();

        theme_splash_asset(&config, &resolver, &mut asset);

        assert!(asset.applied.is_empty());
    }

    #[test]
    fn missing_style_error_names_the_resource() {
        let config = TintConfig::with_color(Color::rgb(0xFF, 0x00, 0x80));
        let resolver = FakeResolver::empty();
        let mut asset = FakeAsset::default();

        let err = try_theme_splash_asset(&config, &resolver, &mut asset).unwrap_err();

        assert_eq!(
            err,
            SplashError::StyleNotFound("splash_seekbar_color_style_7_0_4".to_owned())
        );
    }

    #[test]
    fn closed_gate_skips_theming_entirely() {
        let resolver = FakeResolver::with_style("splash_seekbar_color_style_7_0_0", 42);
        let mut asset = FakeAsset::default();

        theme_splash_asset(&TintConfig::disabled(), &resolver, &mut asset);

        assert!(asset.applied.is_empty());
    }
}
