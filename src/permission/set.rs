// ABOUTME: Implements PermissionSet - the closed allow-list fixed at construction.
// ABOUTME: Entries are copied, normalized, and deduplicated in declaration order.

use std::sync::Arc;

use super::Permission;
use crate::error::RuleError;

/// The allow-list of permissions a registry accepts.
///
/// The set owns its own copy of the names and cannot be changed once built.
/// Clones share the same storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionSet {
    permissions: Arc<[Permission]>,
}

impl PermissionSet {
    /// Build an allow-list from any collection of names.
    pub fn new<I, P>(permissions: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        permissions.into_iter().collect()
    }

    /// Check whether a permission is allow-listed.
    pub fn contains(&self, permission: &Permission) -> bool {
        self.permissions.contains(permission)
    }

    /// Normalize a name and check it against the allow-list.
    pub fn resolve(&self, name: &str) -> Result<Permission, RuleError> {
        let permission = Permission::new(name);
        if self.contains(&permission) {
            Ok(permission)
        } else {
            Err(RuleError::PermissionNotDefined(permission))
        }
    }

    /// Iterate permissions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Permission> {
        self.permissions.iter()
    }

    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }
}

impl<P: AsRef<str>> FromIterator<P> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut permissions: Vec<Permission> = Vec::new();
        for name in iter {
            let permission = Permission::new(name);
            if !permissions.contains(&permission) {
                permissions.push(permission);
            }
        }
        Self {
            permissions: permissions.into(),
        }
    }
}
