// ABOUTME: Root module for rulebook - a permission rule registry and evaluator.
// ABOUTME: Re-exports all public types from submodules.

pub mod config;
pub mod error;
pub mod evaluator;
pub mod permission;
pub mod prelude;
pub mod provider;
pub mod rule;

pub use error::RulebookError;
