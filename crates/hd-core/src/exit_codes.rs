//! Exit codes for the hd-core CLI.
//!
//! Exit codes communicate operation outcome without requiring output
//! parsing.

use hd_common::Error;

/// Exit codes for hd-core operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Inference completed and results were written.
    Ok = 0,

    /// Configuration / model error
    ConfigError = 10,

    /// Pedigree data error
    DataError = 11,

    /// Inference error (evidence admits no possible world)
    InferenceError = 12,

    /// I/O error
    IoError = 13,

    /// Internal/unknown error
    InternalError = 99,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Map an error to its CLI exit code by error-code group.
    pub fn from_error(err: &Error) -> Self {
        match err.code() {
            10..=19 => ExitCode::ConfigError,
            20..=29 => ExitCode::DataError,
            30..=39 => ExitCode::InferenceError,
            60..=69 => ExitCode::IoError,
            _ => ExitCode::InternalError,
        }
    }
}
