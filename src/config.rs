//! Process-level configuration.
//!
//! The configuration names the default culture new threads start with and
//! the default [`ParseMode`]. It can be built in code, read from the
//! environment or from JSON, and is applied with [`SvoConfig::install`].
//!
//! ```rust
//! use svo::config::SvoConfig;
//! use svo::ParseMode;
//!
//! let config = SvoConfig::builder()
//!     .default_culture("nl-BE")
//!     .parse_mode(ParseMode::Lenient)
//!     .build()
//!     .expect("valid configuration");
//! assert_eq!(config.culture().name(), "nl-BE");
//! ```

use crate::culture::{self, Culture};
use crate::error::{SvoError, SvoResult};
use crate::svo::ParseMode;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

/// Environment variable holding the default culture name.
pub const CULTURE_ENV: &str = "SVO_CULTURE";
/// Environment variable holding the default parse mode.
pub const PARSE_MODE_ENV: &str = "SVO_PARSE_MODE";

static STRICT_PARSING: AtomicBool = AtomicBool::new(false);

/// The process default parse mode.
pub fn parse_mode() -> ParseMode {
    if STRICT_PARSING.load(Ordering::Relaxed) {
        ParseMode::Strict
    } else {
        ParseMode::Lenient
    }
}

/// Configuration for value object parsing and formatting defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SvoConfig {
    /// Culture name new threads start with; empty for invariant
    pub default_culture: String,
    /// Recognizers the parsing pipeline runs by default
    pub parse_mode: ParseMode,
}

impl Default for SvoConfig {
    fn default() -> Self {
        Self {
            default_culture: String::new(),
            parse_mode: ParseMode::Lenient,
        }
    }
}

impl SvoConfig {
    /// Create a new builder for the configuration.
    pub fn builder() -> SvoConfigBuilder {
        SvoConfigBuilder::new()
    }

    /// Read the configuration from `SVO_CULTURE` and `SVO_PARSE_MODE`.
    ///
    /// Missing variables keep their defaults. An unknown culture name falls
    /// back to invariant with a warning; an unknown parse mode is an error.
    pub fn from_env() -> SvoResult<Self> {
        let mut config = Self::default();

        if let Ok(name) = std::env::var(CULTURE_ENV) {
            if Culture::get(&name).is_some() {
                config.default_culture = name;
            } else {
                warn!("{} names unknown culture '{}', using invariant", CULTURE_ENV, name);
            }
        }

        if let Ok(mode) = std::env::var(PARSE_MODE_ENV) {
            config.parse_mode = parse_mode_name(&mode)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Read the configuration from a JSON document.
    pub fn from_json(json: &str) -> SvoResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> SvoResult<()> {
        if Culture::get(&self.default_culture).is_none() {
            return Err(SvoError::Configuration {
                message: format!("Unknown default culture '{}'", self.default_culture),
            });
        }
        Ok(())
    }

    /// The configured default culture.
    pub fn culture(&self) -> &'static Culture {
        Culture::get(&self.default_culture).unwrap_or_else(Culture::invariant)
    }

    /// Apply the configuration to the process.
    ///
    /// Threads that swapped their ambient culture keep it; all others pick
    /// up the new default culture.
    pub fn install(&self) -> SvoResult<()> {
        self.validate()?;
        culture::set_process_default(self.culture());
        STRICT_PARSING.store(self.parse_mode == ParseMode::Strict, Ordering::Relaxed);
        debug!(
            "Installed configuration: culture {}, parse mode {:?}",
            self.culture(),
            self.parse_mode
        );
        Ok(())
    }
}

fn parse_mode_name(name: &str) -> SvoResult<ParseMode> {
    match name.trim().to_ascii_lowercase().as_str() {
        "strict" => Ok(ParseMode::Strict),
        "lenient" | "" => Ok(ParseMode::Lenient),
        other => Err(SvoError::Configuration {
            message: format!("Unknown parse mode '{}'", other),
        }),
    }
}

/// Builder for [`SvoConfig`].
#[derive(Debug, Default)]
pub struct SvoConfigBuilder {
    config: SvoConfig,
}

impl SvoConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_culture(mut self, name: impl Into<String>) -> Self {
        self.config.default_culture = name.into();
        self
    }

    pub fn parse_mode(mut self, mode: ParseMode) -> Self {
        self.config.parse_mode = mode;
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> SvoResult<SvoConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
