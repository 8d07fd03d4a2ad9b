//! Pedigree data model and load-time validation.
//!
//! A pedigree is an immutable, index-addressed population. All structural
//! invariants the inference core relies on are enforced here, at the input
//! boundary: both parents recorded or neither, parent references resolve,
//! parental links are acyclic, and the population fits the engine's
//! bitmask representation.

mod load;

pub use load::{load_pedigree, read_pedigree};

use hd_common::{Error, Result};
use std::collections::HashMap;

use crate::inference::PersonSet;

/// Resolved parent indices for one person. Both are always present; a
/// person with unrecorded parents has no `Parents` at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parents {
    pub mother: usize,
    pub father: usize,
}

/// One member of the pedigree.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub parents: Option<Parents>,
    /// Observed trait evidence: `Some(true)` exhibits the trait,
    /// `Some(false)` does not, `None` unknown.
    pub observed_trait: Option<bool>,
}

/// Unresolved person record as supplied by the loading boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonRecord {
    pub name: String,
    pub mother: Option<String>,
    pub father: Option<String>,
    pub observed_trait: Option<bool>,
}

/// Immutable population with name-resolved parent links.
#[derive(Debug, Clone)]
pub struct Pedigree {
    people: Vec<Person>,
    index: HashMap<String, usize>,
}

impl Pedigree {
    /// Maximum supported population size; person sets are `u64` bitmasks.
    pub const MAX_PEOPLE: usize = 64;

    /// Build a pedigree from raw records, validating every structural
    /// invariant the inference core assumes.
    pub fn from_records(records: Vec<PersonRecord>) -> Result<Self> {
        if records.len() > Self::MAX_PEOPLE {
            return Err(Error::PedigreeTooLarge {
                count: records.len(),
                max: Self::MAX_PEOPLE,
            });
        }

        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if index.insert(record.name.clone(), i).is_some() {
                return Err(Error::DuplicatePerson {
                    name: record.name.clone(),
                });
            }
        }

        let mut people = Vec::with_capacity(records.len());
        for record in &records {
            let parents = match (&record.mother, &record.father) {
                (None, None) => None,
                (Some(mother), Some(father)) => Some(Parents {
                    mother: resolve(&index, &record.name, mother)?,
                    father: resolve(&index, &record.name, father)?,
                }),
                _ => {
                    return Err(Error::SingleParent {
                        name: record.name.clone(),
                    })
                }
            };
            people.push(Person {
                name: record.name.clone(),
                parents,
                observed_trait: record.observed_trait,
            });
        }

        let pedigree = Pedigree { people, index };
        pedigree.check_acyclic()?;
        Ok(pedigree)
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn person(&self, idx: usize) -> &Person {
        &self.people[idx]
    }

    /// Index of a person by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// The full population as a person set.
    pub fn everyone(&self) -> PersonSet {
        PersonSet::full(self.people.len())
    }

    /// Hard evidence filter: true when every observed trait value agrees
    /// with membership in `have_trait`.
    pub fn consistent_with_evidence(&self, have_trait: PersonSet) -> bool {
        self.people.iter().enumerate().all(|(i, person)| {
            person
                .observed_trait
                .map_or(true, |observed| observed == have_trait.contains(i))
        })
    }

    /// Reject parental cycles with an iterative three-color walk over the
    /// child-to-parent edges.
    fn check_acyclic(&self) -> Result<()> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Unvisited,
            InProgress,
            Done,
        }

        let mut marks = vec![Mark::Unvisited; self.people.len()];
        for start in 0..self.people.len() {
            if marks[start] != Mark::Unvisited {
                continue;
            }
            // Stack entries: (person, next parent slot to visit).
            let mut stack = vec![(start, 0usize)];
            marks[start] = Mark::InProgress;
            while let Some((person, slot)) = stack.pop() {
                let next = self.people[person]
                    .parents
                    .map(|p| [p.mother, p.father])
                    .and_then(|parents| parents.get(slot).copied());
                match next {
                    Some(parent) => {
                        stack.push((person, slot + 1));
                        match marks[parent] {
                            Mark::InProgress => {
                                return Err(Error::CyclicPedigree {
                                    name: self.people[parent].name.clone(),
                                });
                            }
                            Mark::Unvisited => {
                                marks[parent] = Mark::InProgress;
                                stack.push((parent, 0));
                            }
                            Mark::Done => {}
                        }
                    }
                    None => marks[person] = Mark::Done,
                }
            }
        }
        Ok(())
    }
}

fn resolve(index: &HashMap<String, usize>, person: &str, parent: &str) -> Result<usize> {
    index.get(parent).copied().ok_or_else(|| Error::UnknownParent {
        person: person.to_string(),
        parent: parent.to_string(),
    })
}
