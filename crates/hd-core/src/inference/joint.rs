//! Joint probability of one complete assignment.
//!
//! Gene counts are conditionally independent across people given parental
//! genotypes, and parental genotypes are fixed by the assignment itself,
//! so the joint probability is a plain product of per-person factors. No
//! recursion over the pedigree is needed.

use hd_config::Model;

use super::Assignment;
use crate::pedigree::{Parents, Pedigree};

/// Probability that a parent carrying `gene_count` copies passes the
/// allele on, accounting for mutation in either direction.
pub fn transmission(gene_count: u8, mutation: f64) -> f64 {
    let share = f64::from(gene_count) / 2.0;
    share * (1.0 - mutation) + (1.0 - share) * mutation
}

/// Probability of a child's gene count given both parents' counts.
fn inheritance(child_count: u8, parents: Parents, assignment: &Assignment, mutation: f64) -> f64 {
    let from_mother = transmission(assignment.gene_count(parents.mother), mutation);
    let from_father = transmission(assignment.gene_count(parents.father), mutation);
    match child_count {
        0 => (1.0 - from_mother) * (1.0 - from_father),
        1 => from_mother * (1.0 - from_father) + (1.0 - from_mother) * from_father,
        _ => from_mother * from_father,
    }
}

/// Joint probability that every person has exactly the gene count and
/// trait expression given by `assignment`.
pub fn joint_probability(pedigree: &Pedigree, model: &Model, assignment: &Assignment) -> f64 {
    let mut joint = 1.0;
    for (idx, person) in pedigree.people().iter().enumerate() {
        let gene_count = assignment.gene_count(idx);
        let gene_p = match person.parents {
            None => model.gene_prior(gene_count),
            Some(parents) => inheritance(gene_count, parents, assignment, model.mutation),
        };
        joint *= gene_p * model.trait_given(gene_count, assignment.has_trait(idx));
    }
    joint
}
