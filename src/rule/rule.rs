// ABOUTME: Defines Rule - a permission paired with a sync or async check.
// ABOUTME: Also defines Verdict coercion and the AsyncRule trait for struct rules.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;

use crate::permission::Permission;

/// A synchronous check, already normalized to a verdict.
pub type SyncCheck<U, C> =
    Arc<dyn Fn(&U, Option<&C>) -> Result<bool, anyhow::Error> + Send + Sync>;

/// An asynchronous check producing a deferred verdict.
pub type AsyncCheck<U, C> =
    Arc<dyn Fn(U, Option<C>) -> BoxFuture<'static, Result<bool, anyhow::Error>> + Send + Sync>;

/// How a rule produces its answer. Chosen by the registration call.
pub enum RuleKind<U, C> {
    /// The answer is available as soon as the check returns.
    Sync(SyncCheck<U, C>),

    /// The answer is a future.
    Async(AsyncCheck<U, C>),
}

impl<U, C> Clone for RuleKind<U, C> {
    fn clone(&self) -> Self {
        match self {
            Self::Sync(check) => Self::Sync(Arc::clone(check)),
            Self::Async(check) => Self::Async(Arc::clone(check)),
        }
    }
}

/// A rule deciding one permission.
pub struct Rule<U, C> {
    permission: Permission,
    kind: RuleKind<U, C>,
}

impl<U, C> Rule<U, C> {
    pub(crate) fn new(permission: Permission, kind: RuleKind<U, C>) -> Self {
        Self { permission, kind }
    }

    /// The normalized permission this rule decides.
    pub fn permission(&self) -> &Permission {
        &self.permission
    }

    /// Whether this rule answers with a future.
    pub fn is_async(&self) -> bool {
        matches!(self.kind, RuleKind::Async(_))
    }

    pub fn kind(&self) -> &RuleKind<U, C> {
        &self.kind
    }
}

impl<U, C> Clone for Rule<U, C> {
    fn clone(&self) -> Self {
        Self {
            permission: self.permission.clone(),
            kind: self.kind.clone(),
        }
    }
}

impl<U, C> fmt::Debug for Rule<U, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("permission", &self.permission)
            .field("is_async", &self.is_async())
            .finish()
    }
}

/// A value a rule check may return.
///
/// Only `true` grants the permission. `false`, `None` and `()` all deny.
/// An `Err` is passed through to the caller of `can`.
pub trait Verdict {
    fn into_verdict(self) -> Result<bool, anyhow::Error>;
}

impl Verdict for bool {
    fn into_verdict(self) -> Result<bool, anyhow::Error> {
        Ok(self)
    }
}

impl Verdict for Option<bool> {
    fn into_verdict(self) -> Result<bool, anyhow::Error> {
        Ok(self.unwrap_or(false))
    }
}

impl Verdict for () {
    fn into_verdict(self) -> Result<bool, anyhow::Error> {
        Ok(false)
    }
}

impl<T, E> Verdict for Result<T, E>
where
    T: Verdict,
    E: Into<anyhow::Error>,
{
    fn into_verdict(self) -> Result<bool, anyhow::Error> {
        self.map_err(Into::into)?.into_verdict()
    }
}

/// A stateful asynchronous rule.
///
/// Closures cover most rules; implement this when the check needs its own
/// state or collaborators.
#[async_trait]
pub trait AsyncRule<U, C>: Send + Sync
where
    U: Send + 'static,
    C: Send + 'static,
{
    /// Decide whether `subject` holds the permission.
    async fn check(&self, subject: U, context: Option<C>) -> Result<bool, anyhow::Error>;
}
