// ABOUTME: Rule module - rule definitions, verdicts, and the rule registry.
// ABOUTME: Rules are classified sync or async by the call that registers them.

mod registry;
#[allow(clippy::module_inception)]
mod rule;

pub use registry::*;
pub use rule::*;
