// ABOUTME: Implements the Evaluator - answers "can this subject do this?"
// ABOUTME: Validates, looks up the first matching rule, and shapes the result.

use std::sync::Arc;

use futures::future::TryFutureExt;

use super::Outcome;
use crate::error::RuleError;
use crate::permission::PermissionSet;
use crate::rule::{Registry, Rule, RuleKind};

/// A frozen set of rules with a default subject.
///
/// Built once by [`Builder`](super::Builder) and never changed afterwards.
/// Clones share the same rules.
pub struct Evaluator<U, C = ()> {
    inner: Arc<Inner<U, C>>,
}

struct Inner<U, C> {
    user: U,
    registry: Registry<U, C>,
}

impl<U, C> Evaluator<U, C> {
    pub(crate) fn new(user: U, registry: Registry<U, C>) -> Self {
        Self {
            inner: Arc::new(Inner { user, registry }),
        }
    }

    /// Snapshot of the rules in definition order.
    pub fn rules(&self) -> Vec<Rule<U, C>> {
        self.inner.registry.rules()
    }

    /// The allow-list.
    pub fn permissions(&self) -> &PermissionSet {
        self.inner.registry.permissions()
    }

    /// The subject used when a check names none.
    pub fn default_subject(&self) -> &U {
        &self.inner.user
    }
}

impl<U: Clone, C> Evaluator<U, C> {
    /// Check a permission.
    ///
    /// `subject` falls back to the default subject. A sync rule answers with
    /// [`Outcome::Ready`], an async rule with [`Outcome::Deferred`].
    ///
    /// Fails with [`RuleError::PermissionNotDefined`] for names outside the
    /// allow-list and [`RuleError::RuleNotDefined`] when no rule exists.
    /// A failing sync rule fails here; a failing async rule fails when the
    /// deferred outcome resolves.
    pub fn can(
        &self,
        permission: impl AsRef<str>,
        subject: Option<U>,
        context: Option<C>,
    ) -> Result<Outcome, RuleError> {
        let registry = &self.inner.registry;
        let permission = registry
            .permissions()
            .resolve(permission.as_ref())
            .inspect_err(|err| tracing::debug!(%err, "permission check rejected"))?;

        let Some(rule) = registry.find(&permission) else {
            tracing::debug!(permission = %permission, "no rule defined");
            return Err(RuleError::RuleNotDefined(permission));
        };

        tracing::trace!(
            permission = %permission,
            default_subject = subject.is_none(),
            is_async = rule.is_async(),
            "evaluating rule"
        );

        match rule.kind() {
            RuleKind::Sync(check) => {
                let subject = subject.as_ref().unwrap_or(&self.inner.user);
                let allowed = check(subject, context.as_ref()).map_err(RuleError::Callback)?;
                Ok(Outcome::Ready(allowed))
            }
            RuleKind::Async(check) => {
                let subject = subject.unwrap_or_else(|| self.inner.user.clone());
                let pending = check(subject, context).map_err(RuleError::Callback);
                Ok(Outcome::Deferred(Box::pin(pending)))
            }
        }
    }

    /// Check a permission and wait for the answer, whatever its shape.
    pub async fn check(
        &self,
        permission: impl AsRef<str>,
        subject: Option<U>,
        context: Option<C>,
    ) -> Result<bool, RuleError> {
        self.can(permission, subject, context)?.await
    }
}

impl<U, C> Clone for Evaluator<U, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
