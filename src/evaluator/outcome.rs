// ABOUTME: Defines Outcome - the immediate or deferred answer to a permission check.
// ABOUTME: The shape follows the rule's registration, never the caller's wishes.

use std::fmt;
use std::future::IntoFuture;

use futures::future::{self, BoxFuture, FutureExt};

use crate::error::RuleError;

/// The answer to a permission check.
pub enum Outcome {
    /// Answer from a sync rule.
    Ready(bool),

    /// Answer from an async rule. Errors raised by the rule surface when
    /// the future resolves.
    Deferred(BoxFuture<'static, Result<bool, RuleError>>),
}

impl Outcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }

    /// The immediate answer, if this outcome came from a sync rule.
    pub fn ready(&self) -> Option<bool> {
        match self {
            Self::Ready(allowed) => Some(*allowed),
            Self::Deferred(_) => None,
        }
    }
}

impl IntoFuture for Outcome {
    type Output = Result<bool, RuleError>;
    type IntoFuture = BoxFuture<'static, Result<bool, RuleError>>;

    fn into_future(self) -> Self::IntoFuture {
        match self {
            Self::Ready(allowed) => future::ready(Ok(allowed)).boxed(),
            Self::Deferred(pending) => pending,
        }
    }
}

impl fmt::Debug for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(allowed) => f.debug_tuple("Ready").field(allowed).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}
