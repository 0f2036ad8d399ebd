// ABOUTME: Defines the Builder - collects rules, then freezes them into an Evaluator.
// ABOUTME: Each definition consumes and returns the builder for chaining.

use std::future::Future;

use super::Evaluator;
use crate::config::RulebookConfig;
use crate::error::RuleError;
use crate::permission::PermissionSet;
use crate::rule::{AsyncRule, Registry, Rule, Verdict};

/// Builder for constructing evaluators.
///
/// ```
/// use rulebook::prelude::*;
///
/// let evaluator: Evaluator<&str> = Builder::new("guest", ["read", "write"])
///     .define_rule("read", |_, _| true)?
///     .define_rule("write", |user, _| *user == "admin")?
///     .build();
///
/// assert_eq!(evaluator.can("read", None, None)?.ready(), Some(true));
/// assert_eq!(evaluator.can("write", None, None)?.ready(), Some(false));
/// # Ok::<(), RuleError>(())
/// ```
pub struct Builder<U, C = ()> {
    user: U,
    registry: Registry<U, C>,
}

impl<U, C> Builder<U, C> {
    /// Create a builder with a default subject and a permission allow-list.
    ///
    /// The allow-list is copied; later changes to `permissions` have no effect.
    pub fn new<I, P>(user: U, permissions: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        Self {
            user,
            registry: Registry::new(PermissionSet::new(permissions)),
        }
    }

    /// Create a builder from loaded configuration.
    pub fn from_config(config: RulebookConfig<U>) -> Self {
        Self::new(config.user, config.permissions)
    }

    /// Snapshot of the rules defined so far.
    pub fn rules(&self) -> Vec<Rule<U, C>> {
        self.registry.rules()
    }

    /// Freeze the rules into an evaluator.
    pub fn build(self) -> Evaluator<U, C> {
        tracing::debug!(
            permissions = self.registry.permissions().len(),
            rules = self.registry.len(),
            "evaluator built"
        );
        Evaluator::new(self.user, self.registry)
    }
}

impl<U, C> Builder<U, C>
where
    U: Send + Sync + 'static,
    C: Send + 'static,
{
    /// Define a rule whose answer is available immediately.
    pub fn define_rule<F, V>(
        mut self,
        permission: impl AsRef<str>,
        check: F,
    ) -> Result<Self, RuleError>
    where
        F: Fn(&U, Option<&C>) -> V + Send + Sync + 'static,
        V: Verdict + 'static,
    {
        self.registry.define_rule(permission, check)?;
        Ok(self)
    }

    /// Define a rule whose answer is a future.
    pub fn define_async_rule<F, Fut, V>(
        mut self,
        permission: impl AsRef<str>,
        check: F,
    ) -> Result<Self, RuleError>
    where
        F: Fn(U, Option<C>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = V> + Send + 'static,
        V: Verdict + 'static,
    {
        self.registry.define_async_rule(permission, check)?;
        Ok(self)
    }

    /// Define an asynchronous rule backed by an [`AsyncRule`] implementation.
    pub fn define_async_rule_with<R>(
        mut self,
        permission: impl AsRef<str>,
        rule: R,
    ) -> Result<Self, RuleError>
    where
        R: AsyncRule<U, C> + 'static,
    {
        self.registry.define_async_rule_with(permission, rule)?;
        Ok(self)
    }
}
