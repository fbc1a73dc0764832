//! Marsaglia's bound with the L1 norm
//!
//! Under the L1 norm the length of the shortest nonzero vector is the
//! minimal number of hyperplanes covering every lattice point. Marsaglia
//! derived the upper bound `(j! m^k)^(1/j) = gamma_j * m^(k/j)` for a
//! rank-`k` lattice with `m` points per unit volume in dimension `j`, so the
//! lattice constants here are `gamma_j = (j!)^(1/j)`.

use crate::core::error::{NormalizerError, Result};
use crate::core::normalizer::{table_constant, BoundsTable, Normalizer, MAX_DIM};
use crate::core::types::{log_points, NormType};
use rug::Integer;

/// Marsaglia lattice constants gamma_j = (j!)^(1/j) for each dimension j.
/// Index 0 is an unused placeholder.
static GAMMA: [f64; MAX_DIM + 1] = [
    0.0,
    1.0,
    1.414213562373095,
    1.8171205928321397,
    2.2133638394006432,
    2.6051710846973519,
    2.993795165523909,
    3.3800151591412964,
    3.7643505995031286,
    4.1471662743969129,
    4.5287286881167648,
    4.9092387795843954,
    5.2888519941024479,
    5.6676911762517604,
    6.0458551714185018,
    6.4234247497797611,
    6.8004667982676424,
    7.1770373570247744,
    7.5531838641068058,
    7.9289468448651503,
    8.3043612037393433,
    8.6794572261328691,
    9.0542613653979387,
    9.4287968681752429,
    9.8030842765090769,
    10.177141834880185,
    10.550985823054151,
    10.924630830459005,
    11.298089984044202,
    11.67137513880885,
    12.044497038131644,
    12.417465449489872,
    12.79028927998164,
    13.162976675166152,
    13.535535104041504,
    13.907971432437272,
    14.280291986673252,
    14.652502608998593,
    15.024608706057011,
    15.396615291408378,
    15.768527022963257,
    16.140348236045914,
    16.512082972686357,
    16.883735007647619,
    17.255307871616731,
    17.626804871923535,
    17.99822911109791,
    18.369583503531317,
    18.740870790471075,
];

/// Marsaglia (L1) bound on the shortest nonzero vector
#[derive(Debug, Clone)]
pub struct MinkL1Bound {
    table: BoundsTable,
    rank: usize,
}

impl MinkL1Bound {
    /// Construct the bounds for a rank-`rank` lattice with `m` points per
    /// unit volume, in all dimensions `<= max_dim`, with no bias
    /// reweighting. Restriction: `max_dim <= 48`.
    pub fn new(m: &Integer, rank: usize, max_dim: usize) -> Result<Self> {
        Self::with_beta(m, rank, max_dim, 1.0)
    }

    /// Construct with a bias factor `beta > 0` giving more weight to some of
    /// the dimensions.
    ///
    /// `m` is an arbitrary-precision count; the bound array is computed from
    /// its logarithm so large counts cannot overflow intermediate powers.
    pub fn with_beta(m: &Integer, rank: usize, max_dim: usize, beta: f64) -> Result<Self> {
        if rank < 1 {
            return Err(NormalizerError::invalid_parameters(
                "lattice rank must be at least 1",
            ));
        }
        let log_m = log_points(m)?;

        let table = BoundsTable::compute(NormType::L1, max_dim, beta, |j| {
            GAMMA[j].ln() + rank as f64 * log_m / j as f64
        })?;

        Ok(MinkL1Bound { table, rank })
    }

    /// Lattice rank supplied at construction
    pub fn rank(&self) -> usize {
        self.rank
    }
}

impl Normalizer for MinkL1Bound {
    fn name(&self) -> &'static str {
        "MinkL1"
    }

    fn norm(&self) -> NormType {
        self.table.norm()
    }

    fn max_dim(&self) -> usize {
        self.table.max_dim()
    }

    fn beta(&self) -> f64 {
        self.table.beta()
    }

    fn gamma(&self, j: usize) -> Result<f64> {
        table_constant(&GAMMA, j)
    }

    fn bound(&self, j: usize) -> Result<f64> {
        self.table.bound(j)
    }
}

impl std::fmt::Display for MinkL1Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.table.fmt_named(f, self.name())
    }
}
