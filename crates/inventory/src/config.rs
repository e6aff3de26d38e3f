//! Inventory construction settings.

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult};

/// Capacity used when no limit is configured.
pub const DEFAULT_LIMIT: u64 = 100;

/// Environment variable overriding [`InventoryConfig::limit`].
pub const LIMIT_ENV_VAR: &str = "STOCKROOM_INVENTORY_LIMIT";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Maximum number of units held across all items.
    pub limit: u64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

impl InventoryConfig {
    /// Load settings from the process environment, falling back to defaults.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let config = match lookup(LIMIT_ENV_VAR) {
            Some(raw) => {
                let limit = raw.trim().parse::<u64>().map_err(|e| {
                    DomainError::validation(format!("{LIMIT_ENV_VAR}={raw:?}: {e}"))
                })?;
                Self { limit }
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.limit == 0 {
            return Err(DomainError::validation("inventory limit must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_uses_default_limit() {
        let config = InventoryConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn variable_overrides_limit() {
        let config = InventoryConfig::from_lookup(|key| {
            assert_eq!(key, LIMIT_ENV_VAR);
            Some(" 25 ".to_string())
        })
        .unwrap();
        assert_eq!(config.limit, 25);
    }

    #[test]
    fn rejects_unparsable_and_zero_limits() {
        for raw in ["ten", "-5", "0"] {
            let err = InventoryConfig::from_lookup(|_| Some(raw.to_string())).unwrap_err();
            match err {
                DomainError::Validation(_) => {}
            }
        }
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: InventoryConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, InventoryConfig::default());

        let config: InventoryConfig = serde_json::from_str(r#"{"limit": 20}"#).unwrap();
        assert_eq!(config.limit, 20);
    }
}
