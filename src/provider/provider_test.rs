// ABOUTME: Tests for Provider - registration, lookup failure, forwarding.
// ABOUTME: Verifies clones share the same slot.

use super::*;
use crate::error::RuleError;
use crate::evaluator::Builder;

fn evaluator() -> Evaluator<&'static str> {
    Builder::new("guest", ["read", "write"])
        .define_rule("read", |_, _| true)
        .unwrap()
        .build()
}

#[test]
fn test_not_provided() {
    let provider: Provider<&'static str> = Provider::new();

    assert!(!provider.is_provided());
    assert!(matches!(provider.evaluator(), Err(ProviderError::NotProvided)));

    let err = provider.can("read", None, None).unwrap_err();
    assert!(matches!(err, RulebookError::Provider(ProviderError::NotProvided)));
    assert_eq!(err.to_string(), "Provider error: No evaluator provided");
}

#[test]
fn test_provide_and_forward() {
    let provider = Provider::new();
    assert!(provider.provide(evaluator()).is_none());

    let outcome = provider.can(" read ", None, None).unwrap();
    assert_eq!(outcome.ready(), Some(true));
}

#[test]
fn test_forwards_rule_errors() {
    let provider = Provider::new();
    provider.provide(evaluator());

    let err = provider.can("write", None, None).unwrap_err();
    assert!(matches!(
        err,
        RulebookError::Rule(RuleError::RuleNotDefined(_))
    ));
}

#[test]
fn test_clone_shares_slot() {
    let provider = Provider::new();
    let clone = provider.clone();

    provider.provide(evaluator());
    assert!(clone.is_provided());
    assert_eq!(clone.evaluator().unwrap().rules().len(), 1);
}

#[test]
fn test_provide_replaces() {
    let provider = Provider::new();
    provider.provide(evaluator());

    let replaced = provider.provide(evaluator());
    assert!(replaced.is_some());
}
