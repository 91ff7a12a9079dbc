use serde::{Deserialize, Serialize};

use crate::layout::ALPHABETICAL;

/// Urdu-specific configuration that extends the base `Config` from core.
///
/// This configuration includes:
/// - All generic options from `matnsaz_core::Config` (flattened via serde)
/// - The keyboard layout name
/// - Urdu phonetic confusion groups as the default `phonetic` rules
///
/// # Example
///
/// ```rust
/// use liburdu::UrduConfig;
///
/// let config = UrduConfig::default();
/// assert_eq!(config.layout, "alphabetical");
/// let base = config.into_base();
/// assert!(!base.phonetic.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct UrduConfig {
    /// Base configuration fields (phonetic groups, limits, scoring)
    #[serde(flatten)]
    pub base: matnsaz_core::Config,

    /// Name of the built-in keyboard layout: `alphabetical` or `rasm`
    pub layout: String,
}

impl Default for UrduConfig {
    fn default() -> Self {
        let base = matnsaz_core::Config {
            phonetic: urdu_default_phonetic_rules(),
            ..matnsaz_core::Config::default()
        };

        Self {
            base,
            layout: ALPHABETICAL.to_string(),
        }
    }
}

impl UrduConfig {
    /// Convert this config into the base config for `Engine::new()`
    pub fn into_base(self) -> matnsaz_core::Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &matnsaz_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut matnsaz_core::Config {
        &mut self.base
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> matnsaz_core::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> matnsaz_core::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> matnsaz_core::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Returns the default phonetic confusion groups for Urdu.
///
/// Letters borrowed from Arabic and Persian kept their spelling but lost
/// their distinct sounds, so each group below is pronounced alike:
/// - s sounds: ث س ص
/// - z sounds: ذ ز ض ظ
/// - t sounds: ت ط
/// - h sounds: ح ہ
/// - glottal onset: ا ع
/// - nasal: ن ں
/// - final vowels: ی ے
pub fn urdu_default_phonetic_rules() -> Vec<String> {
    vec![
        "ث=س=ص".into(),
        "ذ=ز=ض=ظ".into(),
        "ت=ط".into(),
        "ح=ہ".into(),
        "ا=ع".into(),
        "ن=ں".into(),
        "ی=ے".into(),
    ]
}
