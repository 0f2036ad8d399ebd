// ABOUTME: Config module - serializable construction options for a Builder.
// ABOUTME: Holds the default subject and the permission allow-list.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Construction options: the default subject and the allow-list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulebookConfig<U> {
    /// Subject checked when a call names none.
    pub user: U,

    /// Every permission rules may be defined for.
    pub permissions: Vec<String>,
}

impl<U> RulebookConfig<U> {
    pub fn new(user: U, permissions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            user,
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }
}

impl<U: DeserializeOwned> RulebookConfig<U> {
    /// Load from a JSON document such as
    /// `{"user": {"id": 1}, "permissions": ["read", "write"]}`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.permissions.iter().all(|p| p.trim().is_empty()) {
            return Err(ConfigError::EmptyPermissions);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod config_test;
