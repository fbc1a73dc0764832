//! Trivial normalizer with every constant set to 1
//!
//! Some figures of merit have no known useful bound on the shortest vector.
//! Merit comparisons still need a denominator in those cases, so this family
//! normalizes by 1 in every dimension.

use crate::core::error::Result;
use crate::core::normalizer::{table_constant, BoundsTable, Normalizer, MAX_DIM};
use crate::core::types::NormType;

/// Index 0 is an unused placeholder, like the real constant tables.
static GAMMA: [f64; MAX_DIM + 1] = [1.0; MAX_DIM + 1];

/// Normalizer whose bounds are identically 1
#[derive(Debug, Clone)]
pub struct UnitBound {
    table: BoundsTable,
}

impl UnitBound {
    /// Construct for the given norm, in all dimensions `<= max_dim`.
    /// Restriction: `max_dim <= 48`.
    pub fn new(norm: NormType, max_dim: usize) -> Result<Self> {
        let table = BoundsTable::compute(norm, max_dim, 1.0, |_| 0.0)?;
        Ok(UnitBound { table })
    }
}

impl Normalizer for UnitBound {
    fn name(&self) -> &'static str {
        "Unit"
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

impl std::fmt::Display for UnitBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.table.fmt_named(f, self.name())
    }
}
