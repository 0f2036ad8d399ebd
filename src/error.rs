// ABOUTME: Defines all error types for the rulebook library using thiserror.
// ABOUTME: Each concern has its own error enum, unified under RulebookError.

use crate::permission::Permission;

/// Top-level error type for the rulebook library.
#[derive(Debug, thiserror::Error)]
pub enum RulebookError {
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors from defining and evaluating rules.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// The permission is not part of the allow-list.
    #[error("Permission \"{0}\" is not defined")]
    PermissionNotDefined(Permission),

    /// The permission is allow-listed but no rule was defined for it.
    #[error("Rule for permission \"{0}\" is not defined")]
    RuleNotDefined(Permission),

    /// A rule callback failed. The original error is kept intact.
    #[error(transparent)]
    Callback(anyhow::Error),
}

/// Errors from looking up a provided evaluator.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("No evaluator provided")]
    NotProvided,
}

/// Errors from loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Permission allow-list is empty")]
    EmptyPermissions,
}
