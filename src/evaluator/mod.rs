// ABOUTME: Evaluator module - the builder, the frozen evaluator, and outcomes.
// ABOUTME: Configure, define rules, build, then query with `can`.

mod builder;
#[allow(clippy::module_inception)]
mod evaluator;
mod outcome;

pub use builder::*;
pub use evaluator::*;
pub use outcome::*;
