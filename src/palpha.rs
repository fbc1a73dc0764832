//! Bound on the P_alpha figure of merit for rank-1 lattices
//!
//! Unlike the per-dimension families this is a one-shot formula: for `s > 1`,
//! `alpha > 1`, `m` prime, and `m > e^(alpha * s / (alpha - 1))` there is an
//! integer vector whose P_alpha value is at most
//! `B_alpha(s) = (e/s)^(alpha*s) * (2*ln(m) + s)^(alpha*s) / m^alpha`.
//! When those conditions fail no bound exists and [`NO_BOUND`] is returned;
//! that is an expected outcome for callers to skip, not an error.

use crate::core::error::{NormalizerError, Result};
use crate::core::normalizer::MAX_DIM;
use crate::core::types::{log_points, NormType};
use rug::integer::IsPrime;
use rug::Integer;

/// Sentinel returned by [`PalphaBound::calc_bound`] when the bound does not
/// apply. Callers must treat it as "no bound", never as a numeric result.
pub const NO_BOUND: f64 = -1.0;

/// Repetitions for the Miller-Rabin primality test on the point count
const PRIME_TEST_REPS: u32 = 30;

/// Bound B_alpha(s) for rank-1 lattices with a prime number of points
#[derive(Debug, Clone)]
pub struct PalphaBound {
    m: Integer,
    log_m: f64,
    alpha: u32,
    max_dim: usize,
}

impl PalphaBound {
    /// Construct for a lattice with `m` points per unit volume, in all
    /// dimensions `<= s`. Restriction: `2 <= s <= 48` and `alpha >= 2`.
    ///
    /// The `alpha` fixed here is the one reported by [`PalphaBound::alpha`];
    /// [`PalphaBound::calc_bound`] accepts its own `alpha` argument so one
    /// instance can sweep several exponents.
    pub fn new(m: Integer, alpha: u32, s: usize) -> Result<Self> {
        if alpha < 2 {
            return Err(NormalizerError::invalid_parameters(format!(
                "alpha must be at least 2, got {}",
                alpha
            )));
        }
        if s < 2 || s > MAX_DIM {
            return Err(NormalizerError::invalid_parameters(format!(
                "dimension must be in [2, {}], got {}",
                MAX_DIM, s
            )));
        }
        let log_m = log_points(&m)?;

        Ok(PalphaBound {
            m,
            log_m,
            alpha,
            max_dim: s,
        })
    }

    /// Compute the bound B_alpha(s), or [`NO_BOUND`] when any applicability
    /// condition fails: `s <= 1`, `alpha <= 1`, `m` not prime, or `m` at or
    /// below the threshold `e^(alpha * s / (alpha - 1))`.
    ///
    /// Evaluated in log space and exponentiated once at the end, so large
    /// prime counts are handled without overflowing intermediate powers.
    pub fn calc_bound(&self, alpha: u32, s: usize) -> f64 {
        if s <= 1 {
            log::debug!("no P_alpha bound: dimension {} is not > 1", s);
            return NO_BOUND;
        }
        if alpha <= 1 {
            log::debug!("no P_alpha bound: alpha {} is not > 1", alpha);
            return NO_BOUND;
        }

        let a = alpha as f64;
        let sf = s as f64;

        // m > e^(alpha * s / (alpha - 1)), compared in log space
        let threshold = a * sf / (a - 1.0);
        if self.log_m <= threshold {
            log::debug!(
                "no P_alpha bound: ln(m) = {} below threshold {}",
                self.log_m,
                threshold
            );
            return NO_BOUND;
        }
        if self.m.is_probably_prime(PRIME_TEST_REPS) == IsPrime::No {
            log::debug!("no P_alpha bound: point count {} is composite", self.m);
            return NO_BOUND;
        }

        let x = a * sf * (1.0 - sf.ln()) + a * sf * (2.0 * self.log_m + sf).ln()
            - a * self.log_m;
        x.exp()
    }

    /// The `alpha` fixed at construction
    pub fn alpha(&self) -> u32 {
        self.alpha
    }

    /// Largest dimension this instance was constructed for
    pub fn max_dim(&self) -> usize {
        self.max_dim
    }

    /// Norm this bound family is defined for
    pub fn norm(&self) -> NormType {
        NormType::L2
    }

    /// Point count supplied at construction
    pub fn point_count(&self) -> &Integer {
        &self.m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_case() {
        // m = 101 is prime and above e^(2*2/1) ~ 54.6
        let bound = PalphaBound::new(Integer::from(101), 2, 8).unwrap();
        let b = bound.calc_bound(2, 2);
        assert!((b - 5.320733509905646).abs() < 1e-9);
    }

    #[test]
    fn test_sentinel_for_dimension_one() {
        let bound = PalphaBound::new(Integer::from(101), 2, 8).unwrap();
        assert_eq!(bound.calc_bound(2, 1), NO_BOUND);
        assert_eq!(bound.calc_bound(7, 0), NO_BOUND);
    }

    #[test]
    fn test_sentinel_for_alpha_one() {
        let bound = PalphaBound::new(Integer::from(101), 2, 8).unwrap();
        assert_eq!(bound.calc_bound(1, 4), NO_BOUND);
        assert_eq!(bound.calc_bound(0, 4), NO_BOUND);
    }

    #[test]
    fn test_sentinel_for_composite_count() {
        let bound = PalphaBound::new(Integer::from(100), 2, 8).unwrap();
        assert_eq!(bound.calc_bound(2, 2), NO_BOUND);
    }

    #[test]
    fn test_sentinel_below_threshold() {
        // 7 is prime but 7 <= e^4
        let bound = PalphaBound::new(Integer::from(7), 2, 8).unwrap();
        assert_eq!(bound.calc_bound(2, 2), NO_BOUND);
    }

    #[test]
    fn test_large_prime_count() {
        // 2^127 - 1 is a Mersenne prime; the bound must stay representable
        let m = (Integer::from(1) << 127) - 1u32;
        let bound = PalphaBound::new(m, 2, 8).unwrap();
        let b = bound.calc_bound(2, 4);
        assert!(b.is_finite() && b > 0.0);
    }

    #[test]
    fn test_call_alpha_may_differ_from_constructed() {
        let bound = PalphaBound::new(Integer::from(101), 2, 8).unwrap();
        assert_eq!(bound.alpha(), 2);
        // sweeping a different alpha through the same instance is allowed
        let b3 = bound.calc_bound(3, 2);
        assert!(b3.is_finite() && b3 > 0.0);
        assert!(b3 != bound.calc_bound(2, 2));
    }

    #[test]
    fn test_construction_validation() {
        assert!(PalphaBound::new(Integer::from(101), 1, 8).is_err());
        assert!(PalphaBound::new(Integer::from(101), 2, 1).is_err());
        assert!(PalphaBound::new(Integer::from(101), 2, MAX_DIM + 1).is_err());
        assert!(PalphaBound::new(Integer::from(0), 2, 8).is_err());
        assert!(PalphaBound::new(Integer::from(101), 2, MAX_DIM).is_ok());
    }
}
