//! Configuration for the codec and age-witness checks.

use serde::{Deserialize, Serialize};

use crate::{AccountError, Result};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Limits and tolerances applied by [`crate::codec::AccountCodec`] and the
/// age-witness verification functions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Largest wire message accepted by decode, in bytes.
    #[serde(default = "default_max_wire_len")]
    pub max_wire_len: usize,

    /// How far a peer's clock may drift from ours when verifying a witness.
    #[serde(default = "default_clock_tolerance_ms")]
    pub witness_clock_tolerance_ms: i64,

    /// Time-to-live of a published witness or timestamp.
    #[serde(default = "default_witness_ttl_ms")]
    pub witness_ttl_ms: i64,
}

fn default_max_wire_len() -> usize {
    64 * 1024
}

fn default_clock_tolerance_ms() -> i64 {
    DAY_MS
}

fn default_witness_ttl_ms() -> i64 {
    30 * DAY_MS
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            max_wire_len: default_max_wire_len(),
            witness_clock_tolerance_ms: default_clock_tolerance_ms(),
            witness_ttl_ms: default_witness_ttl_ms(),
        }
    }
}

impl AccountConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the maximum accepted wire length.
    pub fn with_max_wire_len(mut self, bytes: usize) -> Self {
        self.max_wire_len = bytes;
        self
    }

    /// Set the peer clock tolerance.
    pub fn with_witness_clock_tolerance_ms(mut self, ms: i64) -> Self {
        self.witness_clock_tolerance_ms = ms;
        self
    }

    /// Set the witness time-to-live.
    pub fn with_witness_ttl_ms(mut self, ms: i64) -> Self {
        self.witness_ttl_ms = ms;
        self
    }

    /// Reject values that would make every decode or verification fail.
    pub fn validate(&self) -> Result<()> {
        if self.max_wire_len == 0 {
            return Err(AccountError::Config("max_wire_len must be positive".into()));
        }
        if self.witness_clock_tolerance_ms < 0 {
            return Err(AccountError::Config(
                "witness_clock_tolerance_ms must not be negative".into(),
            ));
        }
        if self.witness_ttl_ms <= 0 {
            return Err(AccountError::Config("witness_ttl_ms must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AccountConfig::default();
        assert_eq!(config.max_wire_len, 65_536);
        assert_eq!(config.witness_clock_tolerance_ms, 86_400_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = AccountConfig::from_json(r#"{"max_wire_len": 1024}"#).unwrap();
        assert_eq!(config.max_wire_len, 1024);
        assert_eq!(config.witness_ttl_ms, default_witness_ttl_ms());
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        assert!(AccountConfig::from_json(r#"{"max_wire_len": 0}"#).is_err());
        assert!(AccountConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_builder() {
        let config = AccountConfig::new()
            .with_max_wire_len(10)
            .with_witness_clock_tolerance_ms(5)
            .with_witness_ttl_ms(7);
        assert_eq!(config.max_wire_len, 10);
        assert_eq!(config.witness_clock_tolerance_ms, 5);
        assert_eq!(config.witness_ttl_ms, 7);
    }
}
