//! Core types for bound computations

use crate::core::error::{NormalizerError, Result};
use rug::{Float, Integer};
use serde::{Deserialize, Serialize};

/// Bits of working precision when taking logarithms of arbitrary-precision
/// point counts. Enough that the f64 result is exact to the last ulp.
const LOG_PRECISION: u32 = 128;

/// Vector norm a bound family is defined for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormType {
    /// Supremum (L-infinity) norm
    Sup,
    /// L1 norm
    L1,
    /// Euclidean (L2) norm
    L2,
    /// Zaremba norm
    Zaremba,
}

impl NormType {
    /// Short label used in reports and log output
    pub fn label(&self) -> &'static str {
        match self {
            NormType::Sup => "sup",
            NormType::L1 => "L1",
            NormType::L2 => "L2",
            NormType::Zaremba => "Zaremba",
        }
    }
}

impl Default for NormType {
    fn default() -> Self {
        NormType::L2
    }
}

impl std::fmt::Display for NormType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Natural logarithm of an arbitrary-precision point count.
///
/// Point counts routinely exceed the f64 range (an MRG with a 63-bit modulus
/// and rank 8 has on the order of 2^504 points per unit volume), so the
/// logarithm is taken through a `rug::Float` before narrowing to f64.
pub fn log_points(m: &Integer) -> Result<f64> {
    if *m < 1 {
        return Err(NormalizerError::invalid_parameters(format!(
            "point count must be >= 1, got {}",
            m
        )));
    }
    Ok(Float::with_val(LOG_PRECISION, m).ln().to_f64())
}

/// Serializable snapshot of a normalizer's construction-time state.
///
/// `bounds[i]` holds the bound for dimension `i + 1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundsReport {
    /// Bound family name
    pub family: String,
    /// Norm the family is defined for
    pub norm: NormType,
    /// Largest dimension with a precomputed bound
    pub max_dim: usize,
    /// Bias factor applied at construction
    pub beta: f64,
    /// Per-dimension bounds for dimensions 1..=max_dim
    pub bounds: Vec<f64>,
}
