//! Platform configuration.
//!
//! A [`PlatformConfig`] names a built-in dialect and optionally overrides its
//! symbols. It is usually read from JSON:
//!
//! ```json
//! {
//!     "platform": "sqlserver",
//!     "quote_identifiers": true,
//!     "identifier_separator": "."
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::dialect::PlatformKind;
use crate::error::Result;
use crate::platform::Platform;

/// Declarative description of a [`Platform`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformConfig {
    /// The dialect supplying the default symbols.
    pub platform: PlatformKind,
    /// Whether identifiers are quoted.
    #[serde(default = "default_true")]
    pub quote_identifiers: bool,
    /// Overrides the identifier quote symbols as `[start, end]`.
    #[serde(default)]
    pub identifier_quote: Option<(String, String)>,
    /// Overrides the value quote symbol.
    #[serde(default)]
    pub value_quote: Option<String>,
    /// Overrides the identifier separator.
    #[serde(default)]
    pub identifier_separator: Option<char>,
}

const fn default_true() -> bool {
    true
}

impl PlatformConfig {
    /// Creates a configuration for `platform` with its default symbols.
    #[must_use]
    pub const fn new(platform: PlatformKind) -> Self {
        Self {
            platform,
            quote_identifiers: true,
            identifier_quote: None,
            value_quote: None,
            identifier_separator: None,
        }
    }

    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] if the JSON is malformed or names an
    /// unknown platform.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the file cannot be read and
    /// [`crate::Error::Config`] if it cannot be parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Builds the configured platform.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidSymbol`] if an override is unusable.
    pub fn build(&self) -> Result<Platform> {
        let has_overrides = self.identifier_quote.is_some()
            || self.value_quote.is_some()
            || self.identifier_separator.is_some();

        let base = Platform::from_kind(self.platform);
        let platform = if has_overrides {
            let (start, end) = match &self.identifier_quote {
                Some((start, end)) => (start.clone(), end.clone()),
                None => {
                    let (start, end) = base.quote_identifier_symbols();
                    (start.to_string(), end.to_string())
                }
            };
            let value_quote = self
                .value_quote
                .clone()
                .unwrap_or_else(|| base.quote_value_symbol().to_string());
            let separator = self
                .identifier_separator
                .unwrap_or_else(|| base.identifier_separator());
            Platform::custom(base.name(), start, end, value_quote, separator)?
                .with_backslash_escapes(self.platform == PlatformKind::MySql)
        } else {
            base
        };

        Ok(platform.with_identifier_quoting(self.quote_identifiers))
    }
}

impl From<PlatformKind> for PlatformConfig {
    fn from(platform: PlatformKind) -> Self {
        Self::new(platform)
    }
}
