// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use rulebook::prelude::*;` to get started quickly.

pub use crate::config::RulebookConfig;
pub use crate::error::{ConfigError, ProviderError, RuleError, RulebookError};
pub use crate::evaluator::{Builder, Evaluator, Outcome};
pub use crate::permission::{Permission, PermissionSet};
pub use crate::provider::Provider;
pub use crate::rule::{AsyncRule, Registry, Rule, RuleKind, Verdict};
