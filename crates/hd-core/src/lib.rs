//! Exact posterior inference over family pedigrees.
//!
//! Given a pedigree with partial evidence about who exhibits a heritable
//! trait, this crate computes each person's posterior distribution over
//! gene count (0, 1, or 2 copies) and trait expression by exhaustive
//! enumeration of every evidence-consistent world:
//!
//! 1. Enumerate trait subsets and reject those conflicting with evidence.
//! 2. For survivors, enumerate all partitions of the population into
//!    zero/one/two-gene groups.
//! 3. Evaluate each complete assignment's joint probability under the
//!    model's conditional probability tables (inheritance with mutation,
//!    trait given genotype).
//! 4. Accumulate per-person marginal tallies and normalize once at the end.
//!
//! The computation is exact and exponential in population size; pedigrees
//! are capped at 64 people so person sets fit in a `u64` bitmask.

pub mod exit_codes;
pub mod inference;
pub mod pedigree;
pub mod report;

pub use hd_common::{Error, OutputFormat, Result};
pub use hd_config::Model;

pub use inference::{infer, joint_probability, Assignment, PersonPosterior, PersonSet};
pub use pedigree::{load_pedigree, read_pedigree, Parents, Pedigree, Person};
