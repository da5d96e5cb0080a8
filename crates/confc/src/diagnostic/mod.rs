//! Diagnostic types: fatal errors and accumulated warnings.

mod error;
mod warning;

pub use error::BuildError;
pub use warning::{Warning, Warnings};
