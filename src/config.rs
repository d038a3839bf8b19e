//! Service configuration: a JSON file with environment overrides on top.

use crate::error::ReportError;
use cosmic_render_lopdf::AssetConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_PROVIDER_URL: &str = "https://pdf.astrologyapi.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
/// Promotional pages at the end of every body document.
pub const DEFAULT_TRAILING_PAGES: usize = 4;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub base_url: String,
    pub user_id: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    pub footer_link: String,
    pub logo_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PROVIDER_URL.to_string(),
            user_id: None,
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            footer_link: "shivcosmic.com".to_string(),
            logo_url: "https://shivcosmic.com/logo.png".to_string(),
        }
    }
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Directory holding backgrounds and the script font.
    pub assets_dir: PathBuf,
    /// Directory composed reports are written to.
    pub reports_dir: PathBuf,
    /// URL prefix under which `reports_dir` is served.
    pub public_base_url: String,
    pub fetch_timeout_secs: u64,
    pub trailing_pages: usize,
    pub assets: AssetConfig,
    pub provider: ProviderConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            reports_dir: PathBuf::from("static/reports"),
            public_base_url: "http://localhost:8000/static/reports".to_string(),
            fetch_timeout_secs: DEFAULT_TIMEOUT_SECS,
            trailing_pages: DEFAULT_TRAILING_PAGES,
            assets: AssetConfig::default(),
            provider: ProviderConfig::default(),
        }
    }
}

impl ServiceConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ReportError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            ReportError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }

    /// Loads `path` if given (defaults otherwise) and applies the process
    /// environment on top.
    pub fn load(path: Option<&Path>) -> Result<Self, ReportError> {
        let config = match path {
            Some(path) => Self::from_json_file(path)?,
            None => Self::default(),
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`, which is queried by environment
    /// variable name.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ReportError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(dir) = lookup("COSMIC_ASSETS_DIR") {
            self.assets_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("COSMIC_REPORTS_DIR") {
            self.reports_dir = PathBuf::from(dir);
        }
        if let Some(url) = lookup("COSMIC_PUBLIC_BASE_URL") {
            self.public_base_url = url;
        }
        if let Some(url) = lookup("ASTROLOGY_API_URL") {
            self.provider.base_url = url;
        }
        if let Some(user) = lookup("ASTROLOGY_API_USER_ID") {
            self.provider.user_id = Some(user);
        }
        if let Some(key) = lookup("ASTROLOGY_API_KEY") {
            self.provider.api_key = Some(key);
        }
        if let Some(secs) = lookup("COSMIC_FETCH_TIMEOUT_SECS") {
            self.fetch_timeout_secs = secs.trim().parse().map_err(|e| {
                ReportError::Config(format!("COSMIC_FETCH_TIMEOUT_SECS '{}': {}", secs, e))
            })?;
        }
        Ok(self)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.fetch_timeout(), Duration::from_secs(120));
        assert_eq!(config.trailing_pages, 4);
        assert_eq!(config.provider.base_url, DEFAULT_PROVIDER_URL);
        assert!(config.provider.user_id.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ServiceConfig::from_json_str(
            r#"{"reports_dir": "/srv/reports", "assets": {"cover_background": "cover.png"}}"#,
        )
        .unwrap();
        assert_eq!(config.reports_dir, PathBuf::from("/srv/reports"));
        assert_eq!(config.assets.cover_background, "cover.png");
        assert_eq!(config.assets.closing_background, "end_bg.jpg");
        assert_eq!(config.trailing_pages, 4);
    }

    #[test]
    fn test_environment_overrides() {
        let config = ServiceConfig::default()
            .with_overrides(env(&[
                ("COSMIC_ASSETS_DIR", "/opt/assets"),
                ("ASTROLOGY_API_USER_ID", "6100"),
                ("ASTROLOGY_API_KEY", "secret"),
                ("COSMIC_FETCH_TIMEOUT_SECS", "30"),
                ("COSMIC_REPORTS_DIR", "  "),
            ]))
            .unwrap();
        assert_eq!(config.assets_dir, PathBuf::from("/opt/assets"));
        assert_eq!(config.provider.user_id.as_deref(), Some("6100"));
        assert_eq!(config.provider.api_key.as_deref(), Some("secret"));
        assert_eq!(config.fetch_timeout(), Duration::from_secs(30));
        assert_eq!(config.reports_dir, PathBuf::from("static/reports"));
    }

    #[test]
    fn test_bad_timeout_override_is_rejected() {
        let err = ServiceConfig::default()
            .with_overrides(env(&[("COSMIC_FETCH_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, ReportError::Config(_)));
    }
}
