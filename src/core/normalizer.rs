//! Shared bound storage and the common normalizer contract
//!
//! Every per-dimension bound family owns a [`BoundsTable`]: a fixed array of
//! normalization bounds, one per dimension, computed once at construction and
//! read-only afterwards. Empirical shortest-vector lengths are divided by
//! these bounds to obtain a dimensionless figure of merit.

use crate::core::error::{NormalizerError, Result};
use crate::core::types::{BoundsReport, NormType};

/// Largest dimension any bound family tabulates constants for
pub const MAX_DIM: usize = 48;

/// Common contract of the per-dimension bound families.
///
/// `gamma` answers from the family's constant table (valid up to
/// [`MAX_DIM`]); `bound` answers from the instance's precomputed bound array
/// (valid up to the `max_dim` chosen at construction). Both fail with
/// [`NormalizerError::DimensionOutOfRange`] outside their range rather than
/// clamping.
pub trait Normalizer {
    /// Bound family name
    fn name(&self) -> &'static str;

    /// Norm this normalizer is defined for
    fn norm(&self) -> NormType;

    /// Largest dimension with a precomputed bound
    fn max_dim(&self) -> usize;

    /// Bias factor applied at construction
    fn beta(&self) -> f64;

    /// Lattice constant gamma_j for dimension `j`, `1 <= j <= MAX_DIM`
    fn gamma(&self, j: usize) -> Result<f64>;

    /// Normalization bound for dimension `j`, `1 <= j <= max_dim`
    fn bound(&self, j: usize) -> Result<f64>;

    /// Snapshot of the per-dimension bounds for reporting
    fn report(&self) -> BoundsReport {
        let bounds = (1..=self.max_dim())
            .filter_map(|j| self.bound(j).ok())
            .collect();
        BoundsReport {
            family: self.name().to_string(),
            norm: self.norm(),
            max_dim: self.max_dim(),
            beta: self.beta(),
            bounds,
        }
    }
}

/// Look up a lattice constant in a family's table, validating the dimension.
pub(crate) fn table_constant(table: &[f64], j: usize) -> Result<f64> {
    if j < 1 || j > MAX_DIM {
        return Err(NormalizerError::dimension_out_of_range(j, MAX_DIM));
    }
    Ok(table[j])
}

/// Per-instance array of normalization bounds shared by the bound families.
///
/// The array is filled exactly once, by [`BoundsTable::compute`], and frozen
/// for the lifetime of the instance. Reads after construction need no
/// synchronization.
#[derive(Debug, Clone)]
pub struct BoundsTable {
    norm: NormType,
    max_dim: usize,
    beta: f64,
    /// Index 0 is an unused sentinel so indices align with 1-based dimension
    bounds: Vec<f64>,
}

impl BoundsTable {
    /// Fill the bound array for dimensions `1..=max_dim`.
    ///
    /// `log_term(j)` is the family's contribution in log space: the weighted
    /// log of the lattice constant plus the density term. The bias factor
    /// enters as `j * ln(beta)` so that `beta` reweights every family the
    /// same way, and the result is exponentiated only at the very end.
    pub(crate) fn compute<F>(
        norm: NormType,
        max_dim: usize,
        beta: f64,
        log_term: F,
    ) -> Result<Self>
    where
        F: Fn(usize) -> f64,
    {
        if max_dim < 1 || max_dim > MAX_DIM {
            return Err(NormalizerError::invalid_parameters(format!(
                "max dimension must be in [1, {}], got {}",
                MAX_DIM, max_dim
            )));
        }
        if !(beta > 0.0) || !beta.is_finite() {
            return Err(NormalizerError::invalid_parameters(format!(
                "beta must be a positive finite value, got {}",
                beta
            )));
        }

        let log_beta = beta.ln();
        let mut bounds = vec![0.0f64; max_dim + 1];
        for j in 1..=max_dim {
            let x = log_term(j) + j as f64 * log_beta;
            let value = x.exp();
            if !value.is_finite() || value <= 0.0 {
                return Err(NormalizerError::numerical_instability(format!(
                    "bound for dimension {} is not representable (log value {})",
                    j, x
                )));
            }
            bounds[j] = value;
        }

        log::debug!(
            "computed {} normalization bounds ({} norm, beta = {})",
            max_dim,
            norm,
            beta
        );

        Ok(BoundsTable {
            norm,
            max_dim,
            beta,
            bounds,
        })
    }

    /// Norm the bounds were computed for
    pub fn norm(&self) -> NormType {
        self.norm
    }

    /// Largest dimension with a precomputed bound
    pub fn max_dim(&self) -> usize {
        self.max_dim
    }

    /// Bias factor applied at construction
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Bound for dimension `j`, `1 <= j <= max_dim`
    pub fn bound(&self, j: usize) -> Result<f64> {
        if j < 1 || j > self.max_dim {
            return Err(NormalizerError::dimension_out_of_range(j, self.max_dim));
        }
        Ok(self.bounds[j])
    }

    /// Render the bounds as the multi-line listing used by `Display` impls
    pub(crate) fn fmt_named(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        name: &str,
    ) -> std::fmt::Result {
        writeln!(
            f,
            "{} bounds ({} norm, t = {}, beta = {}):",
            name, self.norm, self.max_dim, self.beta
        )?;
        for j in 1..=self.max_dim {
            writeln!(f, "  bound[{:2}] = {:.12e}", j, self.bounds[j])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_rejects_bad_dimensions() {
        assert!(BoundsTable::compute(NormType::L2, 0, 1.0, |_| 0.0).is_err());
        assert!(BoundsTable::compute(NormType::L2, MAX_DIM + 1, 1.0, |_| 0.0).is_err());
        assert!(BoundsTable::compute(NormType::L2, MAX_DIM, 1.0, |_| 0.0).is_ok());
    }

    #[test]
    fn test_compute_rejects_bad_beta() {
        assert!(BoundsTable::compute(NormType::L2, 4, 0.0, |_| 0.0).is_err());
        assert!(BoundsTable::compute(NormType::L2, 4, -1.0, |_| 0.0).is_err());
        assert!(BoundsTable::compute(NormType::L2, 4, f64::NAN, |_| 0.0).is_err());
    }

    #[test]
    fn test_bound_range_checks() {
        let table = BoundsTable::compute(NormType::L2, 8, 1.0, |j| j as f64 * 0.1).unwrap();
        assert!(table.bound(0).is_err());
        assert!(table.bound(9).is_err());
        for j in 1..=8 {
            let b = table.bound(j).unwrap();
            assert!(b.is_finite() && b > 0.0);
        }
    }

    #[test]
    fn test_overflowing_log_term_is_an_error() {
        // exp(1000) is not representable in f64
        let result = BoundsTable::compute(NormType::L2, 4, 1.0, |_| 1000.0);
        assert!(matches!(
            result,
            Err(NormalizerError::NumericalInstability(_))
        ));
    }

    #[test]
    fn test_table_constant_range() {
        let table = [0.0; MAX_DIM + 1];
        assert!(table_constant(&table, 0).is_err());
        assert!(table_constant(&table, MAX_DIM + 1).is_err());
        assert!(table_constant(&table, 1).is_ok());
        assert!(table_constant(&table, MAX_DIM).is_ok());
    }
}
