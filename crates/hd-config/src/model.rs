//! The heredity network's conditional probability tables.

use hd_common::Error;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::GENE_STATES;

/// Tolerance for checking that a distribution sums to 1.
const SUM_TOLERANCE: f64 = 1e-9;

/// Complete probability model for the heredity network.
///
/// Indices into `gene_prior` and `trait_given` are gene counts (number of
/// copies of the allele a person carries, 0 through 2).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Unconditional probability of carrying 0, 1, or 2 gene copies,
    /// applied to people with no recorded parents.
    pub gene_prior: [f64; GENE_STATES],

    /// Probability of exhibiting the trait given each gene count.
    pub trait_given: [f64; GENE_STATES],

    /// Probability that a transmitted allele flips value during inheritance.
    pub mutation: f64,
}

/// Embedded default model JSON for fallback.
const DEFAULT_MODEL_JSON: &str = include_str!("schemas/model.default.json");

impl Default for Model {
    fn default() -> Self {
        // Parsed at startup from the compile-time embedded JSON; a parse
        // failure here means the embedded file itself is broken.
        Self::parse_json(DEFAULT_MODEL_JSON).expect("embedded default model JSON is invalid")
    }
}

impl Model {
    /// Load a model from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        Self::parse_json(&content)
    }

    /// Parse a model from a JSON string.
    pub fn parse_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::InvalidModel(format!("invalid JSON: {e}")))
    }

    /// Unconditional prior probability for a gene count.
    pub fn gene_prior(&self, gene_count: u8) -> f64 {
        self.gene_prior[gene_count as usize]
    }

    /// Probability of the given trait expression for a gene count.
    pub fn trait_given(&self, gene_count: u8, has_trait: bool) -> f64 {
        let p = self.trait_given[gene_count as usize];
        if has_trait {
            p
        } else {
            1.0 - p
        }
    }

    /// Copy of this model with a different mutation rate.
    pub fn with_mutation(&self, mutation: f64) -> Self {
        Self {
            mutation,
            ..self.clone()
        }
    }

    /// Semantic validation: every entry is a probability, the gene prior
    /// sums to 1, and the mutation rate is in [0, 1].
    pub fn validate(&self) -> Result<(), Error> {
        for (i, p) in self.gene_prior.iter().enumerate() {
            if !p.is_finite() || !(0.0..=1.0).contains(p) {
                return Err(Error::InvalidModel(format!(
                    "gene_prior[{i}] = {p} is not a probability"
                )));
            }
        }
        for (i, p) in self.trait_given.iter().enumerate() {
            if !p.is_finite() || !(0.0..=1.0).contains(p) {
                return Err(Error::InvalidModel(format!(
                    "trait_given[{i}] = {p} is not a probability"
                )));
            }
        }
        let sum: f64 = self.gene_prior.iter().sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(Error::InvalidModel(format!(
                "gene_prior sums to {sum}, expected 1"
            )));
        }
        if !self.mutation.is_finite() || !(0.0..=1.0).contains(&self.mutation) {
            return Err(Error::InvalidModel(format!(
                "mutation = {} is not a probability",
                self.mutation
            )));
        }
        Ok(())
    }
}
