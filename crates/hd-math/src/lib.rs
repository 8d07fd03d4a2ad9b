//! Heredity math utilities.

pub mod dist;

pub use dist::*;
