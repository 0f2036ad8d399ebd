// ABOUTME: Implements the Registry - the ordered, append-only rule collection
// ABOUTME: guarded by the permission allow-list.

use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;

use super::{AsyncCheck, AsyncRule, Rule, RuleKind, SyncCheck, Verdict};
use crate::error::RuleError;
use crate::permission::{Permission, PermissionSet};

type Pending = BoxFuture<'static, Result<bool, anyhow::Error>>;

/// An ordered collection of rules for a closed set of permissions.
///
/// Rules are kept in definition order and never removed. Several rules may
/// name the same permission; lookups return the first.
pub struct Registry<U, C> {
    permissions: PermissionSet,
    rules: Vec<Rule<U, C>>,
}

impl<U, C> Registry<U, C> {
    /// Create an empty registry over an allow-list.
    pub fn new(permissions: PermissionSet) -> Self {
        Self {
            permissions,
            rules: Vec::new(),
        }
    }

    /// The allow-list this registry accepts.
    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }

    /// Snapshot of the rules in definition order.
    pub fn rules(&self) -> Vec<Rule<U, C>> {
        self.rules.clone()
    }

    /// Find the first rule for a permission.
    pub fn find(&self, permission: &Permission) -> Option<&Rule<U, C>> {
        self.rules.iter().find(|rule| rule.permission() == permission)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn push(&mut self, permission: &str, kind: RuleKind<U, C>) -> Result<&mut Self, RuleError> {
        let permission = self.permissions.resolve(permission).inspect_err(|_| {
            tracing::debug!(permission, "rejected rule for unknown permission");
        })?;
        tracing::debug!(
            permission = %permission,
            is_async = matches!(kind, RuleKind::Async(_)),
            "rule defined"
        );
        self.rules.push(Rule::new(permission, kind));
        Ok(self)
    }
}

impl<U, C> Registry<U, C>
where
    U: Send + Sync + 'static,
    C: Send + 'static,
{
    /// Define a rule whose answer is available immediately.
    pub fn define_rule<F, V>(
        &mut self,
        permission: impl AsRef<str>,
        check: F,
    ) -> Result<&mut Self, RuleError>
    where
        F: Fn(&U, Option<&C>) -> V + Send + Sync + 'static,
        V: Verdict + 'static,
    {
        let check: SyncCheck<U, C> = Arc::new(move |subject: &U, context: Option<&C>| {
            check(subject, context).into_verdict()
        });
        self.push(permission.as_ref(), RuleKind::Sync(check))
    }

    /// Define a rule whose answer is a future.
    pub fn define_async_rule<F, Fut, V>(
        &mut self,
        permission: impl AsRef<str>,
        check: F,
    ) -> Result<&mut Self, RuleError>
    where
        F: Fn(U, Option<C>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = V> + Send + 'static,
        V: Verdict + 'static,
    {
        let check: AsyncCheck<U, C> = Arc::new(
            move |subject: U, context: Option<C>| -> Pending {
                let pending = check(subject, context);
                Box::pin(async move { pending.await.into_verdict() })
            },
        );
        self.push(permission.as_ref(), RuleKind::Async(check))
    }

    /// Define an asynchronous rule backed by an [`AsyncRule`] implementation.
    pub fn define_async_rule_with<R>(
        &mut self,
        permission: impl AsRef<str>,
        rule: R,
    ) -> Result<&mut Self, RuleError>
    where
        R: AsyncRule<U, C> + 'static,
    {
        let rule = Arc::new(rule);
        let check: AsyncCheck<U, C> = Arc::new(
            move |subject: U, context: Option<C>| -> Pending {
                let rule = Arc::clone(&rule);
                Box::pin(async move { rule.check(subject, context).await })
            },
        );
        self.push(permission.as_ref(), RuleKind::Async(check))
    }
}
