// ABOUTME: Provider module - a shared slot adapters use to reach the evaluator.
// ABOUTME: Lookups fail loudly when no evaluator was provided upstream.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{ProviderError, RulebookError};
use crate::evaluator::{Evaluator, Outcome};

/// A shared slot holding the current evaluator.
///
/// Integrations register the evaluator once with [`provide`](Self::provide)
/// and forward checks through [`can`](Self::can). Clones share one slot.
pub struct Provider<U, C = ()> {
    slot: Arc<RwLock<Option<Evaluator<U, C>>>>,
}

impl<U, C> Provider<U, C> {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self {
            slot: Arc::new(RwLock::new(None)),
        }
    }

    /// Register the evaluator, returning the one it replaces.
    pub fn provide(&self, evaluator: Evaluator<U, C>) -> Option<Evaluator<U, C>> {
        let previous = self.slot.write().replace(evaluator);
        tracing::debug!(replaced = previous.is_some(), "evaluator provided");
        previous
    }

    /// Retrieve the current evaluator.
    pub fn evaluator(&self) -> Result<Evaluator<U, C>, ProviderError> {
        self.slot.read().clone().ok_or(ProviderError::NotProvided)
    }

    pub fn is_provided(&self) -> bool {
        self.slot.read().is_some()
    }
}

impl<U: Clone, C> Provider<U, C> {
    /// Forward a permission check to the current evaluator.
    pub fn can(
        &self,
        permission: impl AsRef<str>,
        subject: Option<U>,
        context: Option<C>,
    ) -> Result<Outcome, RulebookError> {
        Ok(self.evaluator()?.can(permission, subject, context)?)
    }
}

impl<U, C> Default for Provider<U, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U, C> Clone for Provider<U, C> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

#[cfg(test)]
mod provider_test;
