//! # Form configuration — `forms.toml`
//!
//! Tunables for the intake forms, embedded next to the web binary
//! (filename: [`FormsConfig::filename`] = `"forms.toml"`). The validators read
//! the name length bounds from here and the submit pipeline reads whether to
//! show a blocking confirmation.
//!
//! ## Structure
//!
//! ```toml
//! [validation]
//! name_min_len = 2
//! name_max_len = 50
//!
//! [submit]
//! confirm = true    # blocking confirmation after a successful submit
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`FormsConfig`] | Top-level config, parsed with [`FormsConfig::from_toml`]. |
//! | [`ValidationConfig`] | Character bounds for first/last names, defaults **2..=50**. |
//! | [`SubmitConfig`] | Whether to show the confirmation summary, default **true**. |
//!
//! Every field carries a serde default, so a missing or empty file is the
//! default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `forms.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FormsConfig {
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub submit: SubmitConfig,
}

/// Field validation bounds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Minimum number of characters in a first or last name.
    #[serde(default = "default_name_min_len")]
    pub name_min_len: usize,
    /// Maximum number of characters in a first or last name.
    #[serde(default = "default_name_max_len")]
    pub name_max_len: usize,
}

fn default_name_min_len() -> usize {
    2
}

fn default_name_max_len() -> usize {
    50
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            name_min_len: default_name_min_len(),
            name_max_len: default_name_max_len(),
        }
    }
}

/// Submit behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmitConfig {
    #[serde(default = "default_confirm")]
    pub confirm: bool,
}

fn default_confirm() -> bool {
    true
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            confirm: default_confirm(),
        }
    }
}

impl FormsConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "forms.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = FormsConfig::from_toml("").unwrap();
        assert_eq!(config, FormsConfig::default());
        assert_eq!(config.validation.name_min_len, 2);
        assert_eq!(config.validation.name_max_len, 50);
        assert!(config.submit.confirm);
    }

    #[test]
    fn test_partial_sections() {
        let config = FormsConfig::from_toml("[validation]\nname_max_len = 30\n").unwrap();
        assert_eq!(config.validation.name_min_len, 2);
        assert_eq!(config.validation.name_max_len, 30);
        assert!(config.submit.confirm);
    }

    #[test]
    fn test_full_file() {
        let text = "[validation]\nname_min_len = 1\nname_max_len = 10\n\n[submit]\nconfirm = false\n";
        let config = FormsConfig::from_toml(text).unwrap();
        assert_eq!(config.validation.name_min_len, 1);
        assert_eq!(config.validation.name_max_len, 10);
        assert!(!config.submit.confirm);
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(FormsConfig::from_toml("[submit]\nconfirm = \"yes\"\n").is_err());
    }
}
