//! Expansion configuration.
//!
//! Defaults suit a normal compile: expand, stripping earlier output first,
//! and stop reporting after ten errors. Two environment variables override
//! them:
//!
//! | variable          | values                       |
//! |-------------------|------------------------------|
//! | `APX_MODE`        | `expand`, `strip`, `isolate` |
//! | `APX_ERROR_LIMIT` | error count, `0` = unlimited |

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use apx_diagnostic::DiagnosticConfig;

/// Environment variable selecting the [`Mode`].
pub const MODE_VAR: &str = "APX_MODE";
/// Environment variable setting the error limit.
pub const ERROR_LIMIT_VAR: &str = "APX_ERROR_LIMIT";

/// What a session run does to a style sheet.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Mode {
    /// Insert prefixed alternates.
    #[default]
    Expand,
    /// Remove previously generated alternates.
    Strip,
    /// Keep only generated alternates, without comments.
    Isolate,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Expand => "expand",
            Mode::Strip => "strip",
            Mode::Isolate => "isolate",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        [Mode::Expand, Mode::Strip, Mode::Isolate]
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownMode {
                value: s.to_string(),
            })
    }
}

/// Invalid configuration input.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown mode `{value}`; expected `expand`, `strip` or `isolate`")]
    UnknownMode { value: String },

    #[error("invalid APX_ERROR_LIMIT value `{value}`")]
    InvalidErrorLimit {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Settings for a [`Session`](crate::Session).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use]
pub struct ExpandConfig {
    pub mode: Mode,
    /// Strip generated declarations before expanding.
    pub strip_before_expand: bool,
    /// Maximum errors reported per session (0 = unlimited).
    pub error_limit: usize,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        ExpandConfig {
            mode: Mode::default(),
            strip_before_expand: true,
            error_limit: DiagnosticConfig::default().error_limit,
        }
    }
}

impl ExpandConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_strip_before_expand(mut self, strip: bool) -> Self {
        self.strip_before_expand = strip;
        self
    }

    pub fn with_error_limit(mut self, limit: usize) -> Self {
        self.error_limit = limit;
        self
    }

    /// Defaults overridden by `APX_MODE` and `APX_ERROR_LIMIT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(mode) = lookup(MODE_VAR) {
            config.mode = mode.parse()?;
        }

        if let Some(limit) = lookup(ERROR_LIMIT_VAR) {
            config.error_limit =
                limit
                    .trim()
                    .parse()
                    .map_err(|source| ConfigError::InvalidErrorLimit {
                        value: limit.clone(),
                        source,
                    })?;
        }

        tracing::debug!(
            mode = %config.mode,
            error_limit = config.error_limit,
            "loaded expand config",
        );
        Ok(config)
    }

    /// Diagnostic queue settings for this configuration.
    pub fn diagnostic_config(&self) -> DiagnosticConfig {
        DiagnosticConfig {
            error_limit: self.error_limit,
            ..DiagnosticConfig::default()
        }
    }
}
