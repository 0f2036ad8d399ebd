// ABOUTME: Tests for Permission and PermissionSet - trimming, lookup, copying.
// ABOUTME: Verifies whitespace-insensitive identity and allow-list checks.

use super::*;
use crate::error::RuleError;

#[test]
fn test_permission_trims_whitespace() {
    assert_eq!(Permission::new("  write "), Permission::new("write"));
    assert_eq!(Permission::new("\tread\n").as_str(), "read");
    assert_eq!(Permission::from(" delete ").to_string(), "delete");
}

#[test]
fn test_permission_compares_with_padded_str() {
    let permission = Permission::new("read");
    assert_eq!(permission, " read ");
    assert_ne!(permission, "write");
}

#[test]
fn test_permission_serde_normalizes() {
    let permission: Permission = serde_json::from_str("\" read \"").unwrap();
    assert_eq!(permission.as_str(), "read");
    assert_eq!(serde_json::to_string(&permission).unwrap(), "\"read\"");
}

#[test]
fn test_set_contains_normalized() {
    let set = PermissionSet::new(["read", " write ", "delete"]);

    assert!(set.contains(&Permission::new("write")));
    assert!(set.contains(&Permission::new("  read")));
    assert!(!set.contains(&Permission::new("unknown")));
}

#[test]
fn test_set_deduplicates_in_order() {
    let set = PermissionSet::new(["read", "write", " read "]);

    assert_eq!(set.len(), 2);
    let names: Vec<_> = set.iter().map(Permission::as_str).collect();
    assert_eq!(names, vec!["read", "write"]);
}

#[test]
fn test_set_copies_source() {
    let mut source = vec!["read".to_string()];
    let set = PermissionSet::new(&source);
    source.push("write".to_string());
    source[0] = "changed".to_string();

    assert_eq!(set.len(), 1);
    assert!(set.contains(&Permission::new("read")));
}

#[test]
fn test_resolve() {
    let set = PermissionSet::new(["read"]);

    assert_eq!(set.resolve(" read ").unwrap(), Permission::new("read"));

    match set.resolve(" nope ") {
        Err(RuleError::PermissionNotDefined(p)) => assert_eq!(p.as_str(), "nope"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_empty_set() {
    let set = PermissionSet::new(Vec::<String>::new());
    assert!(set.is_empty());
    assert!(set.resolve("read").is_err());
}
