//! Theoretical bounds on the length of the shortest nonzero lattice vector
//!
//! This crate computes, for a lattice of given rank, point density, and
//! dimension, the best theoretical length a shortest nonzero vector could
//! have. Empirical shortest-vector lengths measured on a concrete lattice
//! (typically the lattice of a pseudo-random-number generator) are divided
//! by these bounds to produce a dimensionless figure of merit.
//!
//! Supported bound families:
//! - Minkowski sphere-packing bound with the L2 norm ([`MinkowskiBound`])
//! - Marsaglia's bound with the L1 norm ([`MinkL1Bound`])
//! - The rank-1 P_alpha bound ([`PalphaBound`])
//! - A trivial all-ones normalizer ([`UnitBound`])
//!
//! # Examples
//!
//! Per-dimension bounds from a log density:
//! ```rust
//! use lattice_normalizer::{MinkowskiBound, Normalizer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // a lattice with e^-10 points per unit volume, dimensions up to 16
//! let bound = MinkowskiBound::new(-10.0, 16)?;
//! assert!(bound.bound(4)? > bound.bound(8)?);
//! # Ok(())
//! # }
//! ```
//!
//! One-shot P_alpha bound for a prime point count:
//! ```rust
//! use lattice_normalizer::PalphaBound;
//! use rug::Integer;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bound = PalphaBound::new(Integer::from(101), 2, 8)?;
//! let b = bound.calc_bound(2, 2);
//! assert!(b > 0.0); // -1.0 would mean the bound does not apply
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod mink_l1;
pub mod minkowski;
pub mod palpha;
pub mod unit;

pub use crate::core::*;
pub use mink_l1::*;
pub use minkowski::*;
pub use palpha::*;
pub use unit::*;

// Re-export commonly used types
pub use crate::core::error::{NormalizerError, Result};
pub use crate::core::normalizer::{Normalizer, MAX_DIM};
pub use crate::core::types::{BoundsReport, NormType};

#[cfg(test)]
mod tests {
    use super::*;
    use rug::Integer;

    #[test]
    fn test_construction_boundary_all_variants() {
        let m = Integer::from(101);
        assert!(MinkowskiBound::new(-10.0, MAX_DIM).is_ok());
        assert!(MinkL1Bound::new(&m, 1, MAX_DIM).is_ok());
        assert!(UnitBound::new(NormType::L2, MAX_DIM).is_ok());
        assert!(MinkowskiBound::new(-10.0, MAX_DIM + 1).is_err());
        assert!(MinkL1Bound::new(&m, 1, MAX_DIM + 1).is_err());
        assert!(UnitBound::new(NormType::L2, MAX_DIM + 1).is_err());
    }

    #[test]
    fn test_beta_reweights_every_dimension() {
        let beta = 0.9;
        let plain = MinkowskiBound::new(-8.0, 10).unwrap();
        let biased = MinkowskiBound::with_beta(-8.0, 10, beta).unwrap();
        for j in 1..=10 {
            let expected = plain.bound(j).unwrap() * beta.powi(j as i32);
            let actual = biased.bound(j).unwrap();
            assert!((actual - expected).abs() / expected < 1e-12);
        }
    }

    #[test]
    fn test_variants_share_the_normalizer_contract() {
        let m = Integer::from(101);
        let normalizers: Vec<Box<dyn Normalizer>> = vec![
            Box::new(MinkowskiBound::new(-10.0, 8).unwrap()),
            Box::new(MinkL1Bound::new(&m, 1, 8).unwrap()),
            Box::new(UnitBound::new(NormType::Sup, 8).unwrap()),
        ];
        for n in &normalizers {
            for j in 1..=8 {
                let b = n.bound(j).unwrap();
                assert!(b.is_finite() && b > 0.0, "{} bound({})", n.name(), j);
            }
            assert!(n.bound(9).is_err());
            assert!(n.gamma(0).is_err());
        }
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let bound = MinkowskiBound::new(-10.0, 6).unwrap();
        let report = bound.report();
        assert_eq!(report.family, "Minkowski");
        assert_eq!(report.bounds.len(), 6);

        let json = serde_json::to_string(&report).unwrap();
        let back: BoundsReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.norm, NormType::L2);
        assert_eq!(back.max_dim, 6);
        assert_eq!(back.bounds, report.bounds);
    }

    #[test]
    fn test_display_lists_every_dimension() {
        let bound = MinkowskiBound::new(-10.0, 4).unwrap();
        let text = format!("{}", bound);
        assert!(text.starts_with("Minkowski bounds (L2 norm, t = 4, beta = 1):"));
        assert_eq!(text.lines().count(), 5);
    }
}
