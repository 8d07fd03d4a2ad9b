//! Enumeration driver.
//!
//! Composes the lazy enumeration stages: trait subsets of the population,
//! hard-filtered against observed evidence, then one-gene subsets, then
//! two-gene subsets of the one-gene complement. The two gene subsets are
//! disjoint by construction and everyone outside them carries zero copies,
//! so the three gene groups always partition the population.

use hd_common::Result;
use hd_config::Model;
use tracing::debug;

use super::joint::joint_probability;
use super::marginals::{PersonPosterior, Tallies};
use super::Assignment;
use crate::pedigree::Pedigree;

/// Compute every person's posterior gene-count and trait distributions.
///
/// Runs the full exact enumeration; cost is exponential in population
/// size. Fails with `InconsistentEvidence` when the observed evidence
/// rules out every possible world under the model.
pub fn infer(pedigree: &Pedigree, model: &Model) -> Result<Vec<PersonPosterior>> {
    model.validate()?;

    let everyone = pedigree.everyone();
    let mut tallies = Tallies::new(pedigree.len());
    let mut trait_subsets = 0u64;
    let mut assignments = 0u64;

    for have_trait in everyone.subsets() {
        if !pedigree.consistent_with_evidence(have_trait) {
            continue;
        }
        trait_subsets += 1;
        for one_gene in everyone.subsets() {
            let remainder = one_gene.complement_within(everyone);
            for two_genes in remainder.subsets() {
                let assignment = Assignment::new(one_gene, two_genes, have_trait);
                let p = joint_probability(pedigree, model, &assignment);
                tallies.accumulate(&assignment, p);
                assignments += 1;
            }
        }
    }

    debug!(
        people = pedigree.len(),
        trait_subsets, assignments, "assignment enumeration complete"
    );

    tallies.normalize(pedigree)
}
