// ABOUTME: Tests for RulebookConfig - JSON loading and builder conversion.
// ABOUTME: Verifies empty allow-lists are rejected.

use serde::Deserialize;

use super::*;
use crate::evaluator::{Builder, Evaluator};

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct User {
    id: u32,
}

#[test]
fn test_from_json() {
    let config: RulebookConfig<User> =
        RulebookConfig::from_json(r#"{"user": {"id": 1}, "permissions": ["read", " write "]}"#)
            .unwrap();

    assert_eq!(config.user, User { id: 1 });
    assert_eq!(config.permissions, vec!["read", " write "]);
}

#[test]
fn test_from_json_invalid() {
    let result = RulebookConfig::<User>::from_json(r#"{"user": {"id": 1}}"#);
    assert!(matches!(result, Err(ConfigError::Json(_))));
}

#[test]
fn test_from_json_empty_permissions() {
    let result = RulebookConfig::<User>::from_json(r#"{"user": {"id": 1}, "permissions": [" "]}"#);
    assert!(matches!(result, Err(ConfigError::EmptyPermissions)));
}

#[test]
fn test_builder_from_config() {
    let config = RulebookConfig::new(User { id: 7 }, ["read", "write"]);
    let evaluator: Evaluator<User> = Builder::from_config(config)
        .define_rule("write", |user: &User, _| user.id == 7)
        .unwrap()
        .build();

    assert_eq!(evaluator.permissions().len(), 2);
    assert_eq!(evaluator.default_subject().id, 7);
    assert_eq!(evaluator.can(" write", None, None).unwrap().ready(), Some(true));
}
