//! Delete phase: execute a deletion plan with progress output.

pub mod executor;
pub mod remover;

pub use executor::{DeleteStats, Executor};
pub use remover::{LocalRemover, Remover};
