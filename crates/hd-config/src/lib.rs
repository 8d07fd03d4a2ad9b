//! Heredity probability model loading and validation.
//!
//! This crate provides:
//! - The typed probability model (gene prior, trait CPT, mutation rate)
//! - JSON loading with an embedded compiled-in default
//! - Semantic validation (distributions sum to 1, rates in range)
//!
//! The model is a passed-in configuration value rather than ambient global
//! state, so tests can substitute alternatives (e.g. zero mutation).

pub mod model;

pub use model::Model;

/// Number of gene-count states modeled per person (0, 1, or 2 copies).
pub const GENE_STATES: usize = 3;
