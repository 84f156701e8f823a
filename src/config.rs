use std::env;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_STORAGE_KEY: &str = "cart";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid storage key '{0}': use letters, digits, '-' or '_'")]
    InvalidStorageKey(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    pub storage_dir: PathBuf,
    pub storage_key: String,
    pub currency_symbol: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("."),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl CartConfig {
    /// Read `CART_STORAGE_DIR`, `CART_STORAGE_KEY` and `CART_CURRENCY_SYMBOL`,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let storage_key = lookup("CART_STORAGE_KEY").unwrap_or(defaults.storage_key);
        validate_key(&storage_key)?;

        Ok(Self {
            storage_dir: lookup("CART_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_dir),
            storage_key,
            currency_symbol: lookup("CART_CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),
        })
    }
}

// The key becomes a file name.
fn validate_key(key: &str) -> Result<(), ConfigError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidStorageKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = CartConfig::from_lookup(lookup_from(&[])).expect("defaults are valid");

        assert_eq!(config, CartConfig::default());
        assert_eq!(config.storage_key, "cart");
        assert_eq!(config.currency_symbol, "₹");
    }

    #[test]
    fn overrides_are_read() {
        let config = CartConfig::from_lookup(lookup_from(&[
            ("CART_STORAGE_DIR", "/var/lib/shop"),
            ("CART_STORAGE_KEY", "guest_cart-1"),
            ("CART_CURRENCY_SYMBOL", "$"),
        ]))
        .expect("valid config");

        assert_eq!(config.storage_dir, PathBuf::from("/var/lib/shop"));
        assert_eq!(config.storage_key, "guest_cart-1");
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn path_like_key_is_rejected() {
        let err = CartConfig::from_lookup(lookup_from(&[("CART_STORAGE_KEY", "../etc/passwd")]))
            .expect_err("key must be rejected");

        assert_eq!(
            err,
            ConfigError::InvalidStorageKey("../etc/passwd".to_string())
        );
    }

    #[test]
    fn empty_key_is_rejected() {
        assert!(CartConfig::from_lookup(lookup_from(&[("CART_STORAGE_KEY", "")])).is_err());
    }
}
