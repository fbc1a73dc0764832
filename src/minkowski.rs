//! Minkowski sphere-packing bound with the L2 norm
//!
//! For a lattice with `n` points per unit volume the length of the shortest
//! nonzero vector in dimension `j` is at most
//! `sqrt(gamma_j) * n^(-1/j)`, where the `gamma_j` come from Minkowski's
//! convex body theorem. Point densities in this setting are routinely far
//! outside the f64 range, so the constructor takes the logarithm of the
//! density and every intermediate stays in log space.

use crate::core::error::{NormalizerError, Result};
use crate::core::normalizer::{table_constant, BoundsTable, Normalizer, MAX_DIM};
use crate::core::types::NormType;

/// Minkowski lattice constants gamma_j = (4/pi) * Gamma(j/2 + 1)^(2/j)
/// for each dimension j. Index 0 is an unused placeholder.
static GAMMA: [f64; MAX_DIM + 1] = [
    0.0,
    1.0,
    1.2732395447351627,
    1.5393389262365063,
    1.8006326323142121,
    2.0584513252463976,
    2.3136297963464824,
    2.5667283360613146,
    2.8181423672117467,
    3.068162015515155,
    3.3170068458372663,
    3.5648472771030491,
    3.8118183935819929,
    4.0580291907931901,
    4.3035689624230127,
    4.5485118320162067,
    4.7929200435349002,
    5.0368463993864797,
    5.2803360991541461,
    5.5234281483586466,
    5.7661564530868601,
    6.0085506813565232,
    6.2506369487142412,
    6.4924383696249957,
    6.733975505142658,
    6.9752667295367391,
    7.2163285329502902,
    7.4571757730945781,
    7.6978218859916223,
    7.9382790635461142,
    8.1785584040501593,
    8.4186700404485055,
    8.6586232502128825,
    8.8984265499161602,
    9.138087777005479,
    9.3776141608082474,
    9.6170123844363263,
    9.8562886389597551,
    10.095448670985409,
    10.334497824585418,
    10.573441078365429,
    10.812283078336374,
    11.051028167149732,
    11.289680410170651,
    11.528243618792444,
    11.766721371336928,
    12.005117031835774,
    12.243433766946622,
    12.481674561222849,
];

/// Minkowski (L2) bound on the shortest nonzero vector
#[derive(Debug, Clone)]
pub struct MinkowskiBound {
    table: BoundsTable,
    log_density: f64,
}

impl MinkowskiBound {
    /// Construct the bounds for all dimensions `<= max_dim` from the
    /// logarithm of the point density, with no bias reweighting.
    /// Restriction: `max_dim <= 48`.
    pub fn new(log_density: f64, max_dim: usize) -> Result<Self> {
        Self::with_beta(log_density, max_dim, 1.0)
    }

    /// Construct with a bias factor `beta > 0` giving more weight to some of
    /// the dimensions.
    ///
    /// The bound array holds `exp(0.5 * ln(gamma_j) - log_density / j
    /// + j * ln(beta))` for each dimension; nothing is exponentiated before
    /// that final step.
    pub fn with_beta(log_density: f64, max_dim: usize, beta: f64) -> Result<Self> {
        if !log_density.is_finite() {
            return Err(NormalizerError::invalid_parameters(format!(
                "log density must be finite, got {}",
                log_density
            )));
        }

        let table = BoundsTable::compute(NormType::L2, max_dim, beta, |j| {
            0.5 * GAMMA[j].ln() - log_density / j as f64
        })?;

        Ok(MinkowskiBound { table, log_density })
    }

    /// Construct from a raw density `n > 0`; converts to log space
    /// internally and is otherwise identical to [`MinkowskiBound::with_beta`].
    pub fn from_density(density: f64, max_dim: usize, beta: f64) -> Result<Self> {
        if !(density > 0.0) || !density.is_finite() {
            return Err(NormalizerError::invalid_parameters(format!(
                "density must be a positive finite value, got {}",
                density
            )));
        }
        Self::with_beta(density.ln(), max_dim, beta)
    }

    /// Logarithm of the point density supplied at construction
    pub fn log_density(&self) -> f64 {
        self.log_density
    }
}

impl Normalizer for MinkowskiBound {
    fn name(&self) -> &'static str {
        "Minkowski"
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

impl std::fmt::Display for MinkowskiBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.table.fmt_named(f, self.name())
    }
}
