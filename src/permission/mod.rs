// ABOUTME: Permission module - identifiers and the closed allow-list.
// ABOUTME: Identifiers are compared after trimming surrounding whitespace.

mod identifier;
mod set;

pub use identifier::*;
pub use set::*;

#[cfg(test)]
mod permission_test;
