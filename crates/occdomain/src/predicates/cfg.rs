//! Tolerances for float predicates and float-side deduplication.

/// Default absolute tolerance.
pub const EPS: f64 = 1e-6;

/// Predicate tolerances.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps: EPS }
    }
}
