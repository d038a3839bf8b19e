//! Rendering configuration resolved once at startup.
//!
//! [`AssetConfig`] names the assets; [`RenderingConfig::resolve`] turns it
//! into registered fonts and a handle on the asset store. The result is
//! shared read-only by every page built afterwards.

use cosmic_traits::ResourceProvider;
use cosmic_typeset::{DEVANAGARI, FontId, FontRegistry, ScriptRange, StandardFont};
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

/// An RGB colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const LIGHT_GREY: Rgb = Rgb::new(0.827, 0.827, 0.827);
    pub const GOLD: Rgb = Rgb::new(1.0, 0.843, 0.0);
    pub const DEEP_GOLD: Rgb = Rgb::new(0.83, 0.68, 0.21);
    /// Dark red-black fill used when a background image is unavailable.
    pub const FALLBACK_FILL: Rgb = Rgb::new(0.1, 0.0, 0.0);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    pub const A4: PageSize = PageSize {
        width: 595.2756,
        height: 841.8898,
    };
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::A4
    }
}

/// Fixed texts printed on the cover and closing pages.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Branding {
    pub website: String,
    pub email: String,
    pub thank_you: String,
    pub practitioner: String,
    pub practitioner_title: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            website: "www.shivcosmic.com".to_string(),
            email: "info.shivcosmic@gmail.com".to_string(),
            thank_you: "Thank You".to_string(),
            practitioner: "Dr. Shivsharan Manshetti".to_string(),
            practitioner_title: "Vastu Shastra and Astrologer".to_string(),
        }
    }
}

/// Where the page assets live inside the asset store.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub cover_background: String,
    pub closing_background: String,
    pub script_font: String,
    pub script_font_name: String,
    pub branding: Branding,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            cover_background: "cover_bg.jpg".to_string(),
            closing_background: "end_bg.jpg".to_string(),
            script_font: "fonts/NotoSansDevanagari-Regular.ttf".to_string(),
            script_font_name: "Devanagari".to_string(),
            branding: Branding::default(),
        }
    }
}

/// Everything the page synthesizer needs, resolved and immutable.
pub struct RenderingConfig {
    pub page: PageSize,
    pub cover_background: String,
    pub closing_background: String,
    /// Font for dates, footer and contact lines.
    pub default_font: FontId,
    /// Font for names without script characters.
    pub serif_font: FontId,
    /// Font for names with script characters. Equals `default_font` when the
    /// script font could not be registered.
    pub script_font: FontId,
    pub script: ScriptRange,
    pub branding: Branding,
    fonts: FontRegistry,
    resources: Arc<dyn ResourceProvider>,
}

impl fmt::Debug for RenderingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderingConfig")
            .field("page", &self.page)
            .field("cover_background", &self.cover_background)
            .field("closing_background", &self.closing_background)
            .field("script_font", &self.script_font)
            .field("resources", &self.resources.name())
            .finish()
    }
}

impl RenderingConfig {
    /// Registers the script font and captures the asset locations.
    ///
    /// Never fails: a missing or unusable script font degrades to the
    /// default font and is logged.
    pub fn resolve(assets: &AssetConfig, resources: Arc<dyn ResourceProvider>) -> Self {
        Self::resolve_for_script(assets, resources, DEVANAGARI)
    }

    /// Like [`resolve`](Self::resolve) for a script block other than
    /// Devanagari.
    pub fn resolve_for_script(
        assets: &AssetConfig,
        resources: Arc<dyn ResourceProvider>,
        script: ScriptRange,
    ) -> Self {
        let default_font = FontId::Standard(StandardFont::Helvetica);
        let mut fonts = FontRegistry::new();
        let script_font = fonts.resolve_script_font(
            resources.as_ref(),
            &assets.script_font,
            &assets.script_font_name,
            script,
            default_font.clone(),
        );

        for (label, path) in [
            ("cover", &assets.cover_background),
            ("closing", &assets.closing_background),
        ] {
            if !resources.exists(path) {
                log::warn!("No {} background at '{}'; solid fill will be used", label, path);
            }
        }

        Self {
            page: PageSize::A4,
            cover_background: assets.cover_background.clone(),
            closing_background: assets.closing_background.clone(),
            default_font,
            serif_font: FontId::Standard(StandardFont::TimesRoman),
            script_font,
            script,
            branding: assets.branding.clone(),
            fonts,
            resources,
        }
    }

    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    pub fn resources(&self) -> &dyn ResourceProvider {
        self.resources.as_ref()
    }

    pub fn has_script_font(&self) -> bool {
        self.script_font != self.default_font
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmic_traits::InMemoryResourceProvider;

    #[test]
    fn test_defaults_name_well_known_assets() {
        let assets = AssetConfig::default();
        assert_eq!(assets.cover_background, "cover_bg.jpg");
        assert_eq!(assets.closing_background, "end_bg.jpg");
        assert_eq!(assets.script_font, "fonts/NotoSansDevanagari-Regular.ttf");
        assert_eq!(assets.branding.website, "www.shivcosmic.com");
    }

    #[test]
    fn test_asset_config_from_partial_json() {
        let assets: AssetConfig =
            serde_json::from_str(r#"{"cover_background": "brand/cover.png", "branding": {"website": "example.org"}}"#)
                .unwrap();
        assert_eq!(assets.cover_background, "brand/cover.png");
        assert_eq!(assets.closing_background, "end_bg.jpg");
        assert_eq!(assets.branding.website, "example.org");
        assert_eq!(assets.branding.thank_you, "Thank You");
    }

    #[test]
    fn test_missing_script_font_degrades_to_default() {
        let config = RenderingConfig::resolve(
            &AssetConfig::default(),
            Arc::new(InMemoryResourceProvider::new()),
        );
        assert_eq!(config.script_font, config.default_font);
        assert!(!config.has_script_font());
        assert!(config.fonts().is_empty());
        assert_eq!(config.serif_font.name(), "Times-Roman");
    }
}
