//! Heredity inference common types and errors.
//!
//! This crate provides foundational types shared across hd-* crates:
//! - The unified error type with stable numeric codes
//! - Output format selection for result rendering

pub mod error;
pub mod output;

pub use error::{Error, Result};
pub use output::OutputFormat;
