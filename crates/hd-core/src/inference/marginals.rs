//! Per-person marginal tallies and final normalization.

use hd_common::{Error, Result};
use hd_math::NormalizeError;
use serde::Serialize;

use super::Assignment;
use crate::pedigree::Pedigree;

/// Running unnormalized marginals, one gene tally and one trait tally per
/// person. Accumulation is purely additive; normalization happens exactly
/// once, when the driver has exhausted every assignment.
#[derive(Debug, Clone)]
pub struct Tallies {
    gene: Vec<[f64; 3]>,
    has_trait: Vec<[f64; 2]>,
}

impl Tallies {
    pub fn new(population: usize) -> Self {
        Self {
            gene: vec![[0.0; 3]; population],
            has_trait: vec![[0.0; 2]; population],
        }
    }

    /// Fold one assignment's joint probability into every person's
    /// gene-count and trait tallies.
    pub fn accumulate(&mut self, assignment: &Assignment, p: f64) {
        for idx in 0..self.gene.len() {
            self.gene[idx][assignment.gene_count(idx) as usize] += p;
            self.has_trait[idx][usize::from(assignment.has_trait(idx))] += p;
        }
    }

    /// Raw gene tally for one person (unnormalized).
    pub fn gene(&self, idx: usize) -> [f64; 3] {
        self.gene[idx]
    }

    /// Raw trait tally for one person (unnormalized), indexed false/true.
    pub fn has_trait(&self, idx: usize) -> [f64; 2] {
        self.has_trait[idx]
    }

    /// Rescale every tally to sum to 1 and attach person names.
    ///
    /// A zero-mass tally means the observed evidence admits no possible
    /// world, surfaced as `InconsistentEvidence` rather than NaN output.
    pub fn normalize(mut self, pedigree: &Pedigree) -> Result<Vec<PersonPosterior>> {
        let mut posteriors = Vec::with_capacity(self.gene.len());
        for (idx, person) in pedigree.people().iter().enumerate() {
            hd_math::normalize_in_place(&mut self.gene[idx]).map_err(mass_error)?;
            hd_math::normalize_in_place(&mut self.has_trait[idx]).map_err(mass_error)?;
            posteriors.push(PersonPosterior {
                name: person.name.clone(),
                gene: self.gene[idx],
                has_trait: self.has_trait[idx],
            });
        }
        Ok(posteriors)
    }
}

fn mass_error(err: NormalizeError) -> Error {
    match err {
        NormalizeError::ZeroMass => Error::InconsistentEvidence,
        NormalizeError::NonFinite => Error::Data("non-finite probability tally".to_string()),
    }
}

/// Final normalized posterior distributions for one person.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonPosterior {
    pub name: String,
    /// P(gene count = 0, 1, 2), summing to 1.
    pub gene: [f64; 3],
    /// P(trait = false, true), summing to 1.
    #[serde(rename = "trait")]
    pub has_trait: [f64; 2],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::PersonSet;
    use crate::pedigree::PersonRecord;

    fn two_people() -> Pedigree {
        let records = ["A", "B"]
            .iter()
            .map(|name| PersonRecord {
                name: name.to_string(),
                mother: None,
                father: None,
                observed_trait: None,
            })
            .collect();
        Pedigree::from_records(records).unwrap()
    }

    #[test]
    fn accumulate_routes_mass_to_buckets() {
        let mut tallies = Tallies::new(2);
        // A has one gene and the trait; B has neither.
        let assignment = Assignment::new(
            PersonSet::EMPTY.with(0),
            PersonSet::EMPTY,
            PersonSet::EMPTY.with(0),
        );
        tallies.accumulate(&assignment, 0.25);
        assert_eq!(tallies.gene(0), [0.0, 0.25, 0.0]);
        assert_eq!(tallies.has_trait(0), [0.0, 0.25]);
        assert_eq!(tallies.gene(1), [0.25, 0.0, 0.0]);
        assert_eq!(tallies.has_trait(1), [0.25, 0.0]);
    }

    #[test]
    fn accumulate_is_additive() {
        let mut tallies = Tallies::new(1);
        let world = Assignment::new(PersonSet::EMPTY, PersonSet::EMPTY, PersonSet::EMPTY);
        tallies.accumulate(&world, 0.1);
        tallies.accumulate(&world, 0.2);
        assert!((tallies.gene(0)[0] - 0.3).abs() < 1e-12);
    }

    #[test]
    fn normalize_matches_raw_tally_ratios() {
        let pedigree = two_people();
        let mut tallies = Tallies::new(2);
        tallies.accumulate(
            &Assignment::new(PersonSet::EMPTY.with(0), PersonSet::EMPTY, PersonSet::EMPTY),
            0.3,
        );
        tallies.accumulate(
            &Assignment::new(PersonSet::EMPTY, PersonSet::EMPTY.with(0), PersonSet::EMPTY),
            0.1,
        );

        let raw = tallies.gene(0);
        let total: f64 = raw.iter().sum();
        let posteriors = tallies.normalize(&pedigree).unwrap();
        for bucket in 0..3 {
            let expected = raw[bucket] / total;
            assert!((posteriors[0].gene[bucket] - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn normalize_zero_mass_is_inconsistent_evidence() {
        let pedigree = two_people();
        let tallies = Tallies::new(2);
        assert!(matches!(
            tallies.normalize(&pedigree),
            Err(Error::InconsistentEvidence)
        ));
    }

    #[test]
    fn normalize_empty_pedigree_yields_no_posteriors() {
        let pedigree = Pedigree::from_records(Vec::new()).unwrap();
        let tallies = Tallies::new(0);
        assert!(tallies.normalize(&pedigree).unwrap().is_empty());
    }
}
