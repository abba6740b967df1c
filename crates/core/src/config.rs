//! Configuration system for the predictor simulator.
//!
//! This module defines the configuration consumed when an engine is built. It provides:
//! 1. **Defaults:** Baseline history and index widths used by the reference driver.
//! 2. **Structures:** The flat [`Config`] holding the three bit-widths and the scheme.
//! 3. **Enums:** The [`PredictorType`] selector.
//! 4. **Parsing:** JSON deserialization and the `gshare:<G>` style option strings.
//!
//! A configuration is checked once, by [`Config::validate`], when an engine is built from
//! it. Nothing reads it afterwards.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use tracing::Level;

use crate::common::{ConfigError, MAX_HISTORY_BITS};

/// Default configuration constants.
mod defaults {
    /// Default global history width (16K-entry global tables).
    pub const GHISTORY_BITS: u32 = 14;

    /// Default local history width (1K-entry local predictor table).
    pub const LHISTORY_BITS: u32 = 10;

    /// Default PC index width (1K-entry local history table).
    pub const PC_INDEX_BITS: u32 = 10;
}

/// Branch prediction scheme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum PredictorType {
    /// Always predict taken.
    #[default]
    #[serde(alias = "static")]
    Static,
    /// Single counter table indexed by PC XOR global history.
    #[serde(alias = "Gshare", alias = "gshare")]
    GShare,
    /// Global and local predictors arbitrated by a choice table.
    #[serde(alias = "tournament")]
    Tournament,
    /// Caller-supplied policy; empty unless one is installed.
    #[serde(alias = "custom")]
    Custom,
}

impl PredictorType {
    /// Display name used in reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Static => "Static",
            Self::GShare => "Gshare",
            Self::Tournament => "Tournament",
            Self::Custom => "Custom",
        }
    }
}

/// Predictor configuration.
///
/// # Examples
///
/// Deserializing from JSON; omitted fields take their defaults:
///
/// ```
/// use bpsim_core::config::{Config, PredictorType};
///
/// let config = Config::from_json(r#"{ "predictor": "Tournament", "ghistory_bits": 9 }"#)?;
/// assert_eq!(config.predictor, PredictorType::Tournament);
/// assert_eq!(config.ghistory_bits, 9);
/// assert_eq!(config.lhistory_bits, 10);
/// # Ok::<(), bpsim_core::ConfigError>(())
/// ```
///
/// Parsing a driver option string:
///
/// ```
/// use bpsim_core::config::{Config, PredictorType};
///
/// let config: Config = "--gshare:13".parse()?;
/// assert_eq!(config.predictor, PredictorType::GShare);
/// assert_eq!(config.ghistory_bits, 13);
/// # Ok::<(), bpsim_core::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Global history width G; global tables have `2^G` entries.
    #[serde(default = "Config::default_ghistory_bits")]
    pub ghistory_bits: u32,

    /// Local history width L; the local predictor table has `2^L` entries.
    #[serde(default = "Config::default_lhistory_bits")]
    pub lhistory_bits: u32,

    /// PC index width P; the local history table has `2^P` entries.
    #[serde(default = "Config::default_pc_index_bits")]
    pub pc_index_bits: u32,

    /// Selected prediction scheme.
    #[serde(default)]
    pub predictor: PredictorType,

    /// Log every simulated branch at debug level instead of trace level.
    #[serde(default)]
    pub verbose: bool,
}

impl Config {
    /// Returns the default global history width.
    const fn default_ghistory_bits() -> u32 {
        defaults::GHISTORY_BITS
    }

    /// Returns the default local history width.
    const fn default_lhistory_bits() -> u32 {
        defaults::LHISTORY_BITS
    }

    /// Returns the default PC index width.
    const fn default_pc_index_bits() -> u32 {
        defaults::PC_INDEX_BITS
    }

    /// Default widths with the given scheme selected.
    pub fn with_predictor(predictor: PredictorType) -> Self {
        Self {
            predictor,
            ..Self::default()
        }
    }

    /// Checks every width against [`MAX_HISTORY_BITS`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::BitsOutOfRange`] for the first width that is too large.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("ghistory_bits", self.ghistory_bits),
            ("lhistory_bits", self.lhistory_bits),
            ("pc_index_bits", self.pc_index_bits),
        ];
        for (field, bits) in fields {
            if bits > MAX_HISTORY_BITS {
                return Err(ConfigError::BitsOutOfRange {
                    field,
                    bits,
                    max: MAX_HISTORY_BITS,
                });
            }
        }
        Ok(())
    }

    /// Deserializes and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the document does not parse, or the validation error.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, deserializes and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as [`Config::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Default log level for a driver: `DEBUG` when verbose, which is where
    /// per-branch events are emitted, otherwise `WARN`.
    pub const fn log_level(&self) -> Level {
        if self.verbose { Level::DEBUG } else { Level::WARN }
    }

    /// Copies the scheme and widths of `other` into `self`, keeping `self.verbose`.
    pub const fn apply_predictor(&mut self, other: &Self) {
        self.predictor = other.predictor;
        self.ghistory_bits = other.ghistory_bits;
        self.lhistory_bits = other.lhistory_bits;
        self.pc_index_bits = other.pc_index_bits;
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ghistory_bits: defaults::GHISTORY_BITS,
            lhistory_bits: defaults::LHISTORY_BITS,
            pc_index_bits: defaults::PC_INDEX_BITS,
            predictor: PredictorType::default(),
            verbose: false,
        }
    }
}

/// Parses one width field of an option string.
fn parse_bits(option: &str, field: &str, value: &str) -> Result<u32, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidOption {
        option: option.to_string(),
        reason: format!("{field} '{value}' is not a non-negative integer"),
    })
}

impl FromStr for Config {
    type Err = ConfigError;

    /// Parses `static`, `gshare:<G>`, `tournament:<G>:<L>:<P>` or `custom`.
    ///
    /// A leading `--` is accepted. Widths not named by the option keep their defaults.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let option = s.trim();
        let body = option.strip_prefix("--").unwrap_or(option);
        let mut parts = body.split(':');
        let scheme = parts.next().unwrap_or_default().to_ascii_lowercase();
        let params: Vec<&str> = parts.collect();

        let mut config = Self::default();
        let expected = match scheme.as_str() {
            "static" => {
                config.predictor = PredictorType::Static;
                0
            }
            "gshare" => {
                config.predictor = PredictorType::GShare;
                1
            }
            "tournament" => {
                config.predictor = PredictorType::Tournament;
                3
            }
            "custom" => {
                config.predictor = PredictorType::Custom;
                0
            }
            _ => return Err(ConfigError::UnknownPredictor(body.to_string())),
        };

        if params.len() != expected {
            return Err(ConfigError::InvalidOption {
                option: option.to_string(),
                reason: format!("expected {expected} width(s), got {}", params.len()),
            });
        }

        if let Some(g) = params.first() {
            config.ghistory_bits = parse_bits(option, "global history", g)?;
        }
        if let Some(l) = params.get(1) {
            config.lhistory_bits = parse_bits(option, "local history", l)?;
        }
        if let Some(p) = params.get(2) {
            config.pc_index_bits = parse_bits(option, "pc index", p)?;
        }

        config.validate()?;
        Ok(config)
    }
}
