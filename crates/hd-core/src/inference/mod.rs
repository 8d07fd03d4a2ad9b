//! Inference engine modules.

pub mod engine;
pub mod joint;
pub mod marginals;
pub mod subsets;

pub use engine::infer;
pub use joint::{joint_probability, transmission};
pub use marginals::{PersonPosterior, Tallies};
pub use subsets::PersonSet;

/// One complete world: a partition of the population into gene-count
/// groups plus the set of people exhibiting the trait.
///
/// Membership in `one_gene` or `two_genes` fixes a person's gene count;
/// everyone else carries zero copies. The trait set is enumerated
/// independently of the gene partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub one_gene: PersonSet,
    pub two_genes: PersonSet,
    pub have_trait: PersonSet,
}

impl Assignment {
    pub fn new(one_gene: PersonSet, two_genes: PersonSet, have_trait: PersonSet) -> Self {
        debug_assert!(
            one_gene.intersection(two_genes).is_empty(),
            "gene groups must be disjoint"
        );
        Self {
            one_gene,
            two_genes,
            have_trait,
        }
    }

    /// Gene count assigned to a person in this world.
    pub fn gene_count(&self, idx: usize) -> u8 {
        if self.one_gene.contains(idx) {
            1
        } else if self.two_genes.contains(idx) {
            2
        } else {
            0
        }
    }

    /// Whether a person exhibits the trait in this world.
    pub fn has_trait(&self, idx: usize) -> bool {
        self.have_trait.contains(idx)
    }
}
