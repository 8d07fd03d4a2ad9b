//! CSV input boundary.
//!
//! Reads the tabular pedigree format: a header row of
//! `name,mother,father,trait`, one row per person. Parent cells are blank
//! or the name of another row; the trait cell is `1`, `0`, or blank for
//! unknown.

use hd_common::{Error, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use super::{Pedigree, PersonRecord};

#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    mother: Option<String>,
    father: Option<String>,
    #[serde(rename = "trait")]
    trait_cell: Option<String>,
}

/// Load a pedigree from a CSV file.
pub fn load_pedigree(path: &Path) -> Result<Pedigree> {
    let file = std::fs::File::open(path)
        .map_err(|e| Error::Data(format!("failed to open {}: {}", path.display(), e)))?;
    read_pedigree(file)
}

/// Read a pedigree from any CSV source.
pub fn read_pedigree<R: Read>(source: R) -> Result<Pedigree> {
    let mut reader = csv::Reader::from_reader(source);
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let row: CsvRow = row.map_err(|e| Error::Data(format!("malformed CSV row: {e}")))?;
        let observed_trait = parse_trait_cell(&row.name, row.trait_cell.as_deref())?;
        records.push(PersonRecord {
            mother: non_blank(row.mother),
            father: non_blank(row.father),
            observed_trait,
            name: row.name,
        });
    }
    Pedigree::from_records(records)
}

fn non_blank(cell: Option<String>) -> Option<String> {
    cell.filter(|s| !s.trim().is_empty())
}

fn parse_trait_cell(name: &str, cell: Option<&str>) -> Result<Option<bool>> {
    match cell.map(str::trim) {
        None | Some("") => Ok(None),
        Some("1") => Ok(Some(true)),
        Some("0") => Ok(Some(false)),
        Some(other) => Err(Error::InvalidTraitValue {
            name: name.to_string(),
            value: other.to_string(),
        }),
    }
}
