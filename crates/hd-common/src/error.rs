//! Error types for heredity inference.

use thiserror::Error;

/// Result type alias for heredity operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for heredity inference.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid probability model: {0}")]
    InvalidModel(String),

    // Data loading errors (20-29)
    #[error("pedigree data error: {0}")]
    Data(String),

    #[error("duplicate person name: {name}")]
    DuplicatePerson { name: String },

    #[error("person {name} has exactly one recorded parent; expected both or neither")]
    SingleParent { name: String },

    #[error("person {person} references unknown parent {parent}")]
    UnknownParent { person: String, parent: String },

    #[error("pedigree contains a parental cycle involving {name}")]
    CyclicPedigree { name: String },

    #[error("person {name} has invalid trait value {value:?}; expected 0, 1, or blank")]
    InvalidTraitValue { name: String, value: String },

    #[error("pedigree has {count} people; at most {max} supported")]
    PedigreeTooLarge { count: usize, max: usize },

    // Inference errors (30-39)
    #[error("observed evidence is consistent with no possible world (zero probability mass)")]
    InconsistentEvidence,

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for this error type.
    /// Used for detailed error reporting and exit-code mapping.
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::InvalidModel(_) => 11,
            Error::Data(_) => 20,
            Error::DuplicatePerson { .. } => 21,
            Error::SingleParent { .. } => 22,
            Error::UnknownParent { .. } => 23,
            Error::CyclicPedigree { .. } => 24,
            Error::InvalidTraitValue { .. } => 25,
            Error::PedigreeTooLarge { .. } => 26,
            Error::InconsistentEvidence => 30,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }
}
