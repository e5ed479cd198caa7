//! Translation configuration (recast.toml format).

use crate::error::{ConfigError, ConfigResult};
use recast_cpp::CppProfile;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root translation configuration.
///
/// ```toml
/// source_tab_stop = 4
/// tab_stop = 4              # omit to emit spaces-only indentation
/// int64_type = "int64_t"    # required before Java long will translate
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// Tab stop the Java sources were written against.
    #[serde(default = "default_source_tab_stop")]
    pub source_tab_stop: u32,

    /// Destination tab stop; omitted means no tabs in the output.
    #[serde(default)]
    pub tab_stop: Option<u32>,

    /// Target C++ type for Java long.
    #[serde(default)]
    pub int64_type: Option<String>,
}

fn default_source_tab_stop() -> u32 {
    4
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            source_tab_stop: default_source_tab_stop(),
            tab_stop: Some(4),
            int64_type: None,
        }
    }
}

impl TranslateConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TranslateConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.source_tab_stop == 0 {
            return Err(ConfigError::Validation(
                "source_tab_stop must be positive".to_string(),
            ));
        }
        if self.tab_stop == Some(0) {
            return Err(ConfigError::Validation(
                "tab_stop must be positive when set".to_string(),
            ));
        }
        Ok(())
    }

    /// The output profile this configuration describes.
    pub fn profile(&self) -> CppProfile {
        CppProfile {
            tab_stop: self.tab_stop,
            int64_type: self.int64_type.clone(),
        }
    }
}
