//! Checked normalization of unnormalized probability tallies.
//!
//! These helpers turn accumulated nonnegative tallies into normalized
//! probability vectors. They are used by hd-core's normalizer so that the
//! zero-mass and non-finite cases are handled in one place instead of
//! producing NaN downstream.

use thiserror::Error;

/// Failure modes of tally normalization.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeError {
    /// Every tally entry is zero; there is no mass to rescale.
    #[error("tally has zero probability mass")]
    ZeroMass,

    /// A tally entry is NaN or infinite.
    #[error("tally contains a non-finite value")]
    NonFinite,
}

/// Total probability mass of a tally.
pub fn mass(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Rescale a tally in place so it sums to 1, preserving relative
/// proportions. An empty tally is left unchanged.
pub fn normalize_in_place(values: &mut [f64]) -> Result<(), NormalizeError> {
    if values.is_empty() {
        return Ok(());
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(NormalizeError::NonFinite);
    }
    let total = mass(values);
    if total <= 0.0 {
        return Err(NormalizeError::ZeroMass);
    }
    let ratio = 1.0 / total;
    for v in values.iter_mut() {
        *v *= ratio;
    }
    Ok(())
}

/// Check whether a distribution sums to 1 within `tolerance`.
pub fn is_normalized(values: &[f64], tolerance: f64) -> bool {
    (mass(values) - 1.0).abs() <= tolerance
}
