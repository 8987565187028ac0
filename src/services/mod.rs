//! Business logic: the template defaults resolution pass.

pub mod defaults;

pub use defaults::{apply_defaults, Resolution, ResolveError};
