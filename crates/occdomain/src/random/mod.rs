//! Seeded random occupation domains with replay tokens.
//!
//! Purpose
//! - Reproducible inputs for property tests and benches of the Boolean
//!   engine and the mesh passes.
//!
//! Model
//! - Vertices have small integer lattice coordinates drawn uniformly from
//!   `[-coord_range, coord_range]` (the periodic components of the
//!   dodecagonal lattice stay zero).
//! - A draw adds one simplex at a time and rejects candidates that are
//!   degenerate or overlap an accepted simplex, so every sample is a valid
//!   asymmetric unit.
//! - Determinism uses a replay token `(seed, index)` mixed into one `StdRng`;
//!   `RandomDomains` streams tokens from a master seed and can `regenerate`
//!   any sample from its token alone.

#[cfg(test)]
mod tests;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::debug;

use crate::alg::LatticeVector;
use crate::boolean::{interiors_overlap, Prepared};
use crate::lattice::Lattice;
use crate::polytope::{Polytope, PolytopeError, Simplex};
use crate::predicates::GeomCfg;

/// Errors from the random generators.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RandomError {
    #[error("invalid generator params: {reason}")]
    InvalidParams { reason: String },
    #[error("no valid simplex after {attempts} attempts")]
    Exhausted { attempts: u32 },
    #[error(transparent)]
    Polytope(#[from] PolytopeError),
}

impl RandomError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomCfg {
    /// Simplices per sample.
    pub simplices: usize,
    /// Coordinates are drawn from `[-coord_range, coord_range]`.
    pub coord_range: i64,
    /// Candidate draws per accepted simplex before giving up.
    pub max_attempts: u32,
    pub geom: GeomCfg,
}

impl Default for RandomCfg {
    fn default() -> Self {
        Self {
            simplices: 1,
            coord_range: 1,
            max_attempts: 256,
            geom: GeomCfg::default(),
        }
    }
}

impl RandomCfg {
    fn validate(&self) -> Result<(), RandomError> {
        if self.simplices == 0 {
            return Err(RandomError::invalid("need at least one simplex"));
        }
        if self.coord_range <= 0 {
            return Err(RandomError::invalid("coord_range must be > 0"));
        }
        if self.max_attempts == 0 {
            return Err(RandomError::invalid("max_attempts must be > 0"));
        }
        Ok(())
    }
}

/// Replay token making draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// A sample plus the token that regenerates it.
#[derive(Clone, Debug)]
pub struct Sample<L: Lattice> {
    pub polytope: Polytope<L>,
    pub replay: ReplayToken,
}

fn random_vertex<L: Lattice, R: Rng>(rng: &mut R, range: i64) -> LatticeVector<L::G> {
    // dodecagonal: components 4 and 5 are the periodic axes
    let active = if L::DIM == 2 { 4 } else { 6 };
    let mut ints = [0i64; 6];
    for x in ints.iter_mut().take(active) {
        *x = rng.gen_range(-range..=range);
    }
    LatticeVector::from_ints(ints)
}

/// Draw one non-degenerate simplex.
pub fn random_simplex<L: Lattice, R: Rng>(rng: &mut R, cfg: &RandomCfg) -> Result<Simplex<L::G>, RandomError> {
    cfg.validate()?;
    for _ in 0..cfg.max_attempts {
        let vs: Vec<LatticeVector<L::G>> = (0..=L::DIM)
            .map(|_| random_vertex::<L, R>(rng, cfg.coord_range))
            .collect();
        match Simplex::new::<L>(&vs) {
            Ok(s) => return Ok(s),
            Err(PolytopeError::DegenerateSimplex { .. }) => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Err(RandomError::Exhausted {
        attempts: cfg.max_attempts,
    })
}

/// Draw an asymmetric unit of `cfg.simplices` interior-disjoint simplices.
pub fn random_polytope<L: Lattice>(cfg: &RandomCfg, tok: ReplayToken) -> Result<Polytope<L>, RandomError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let mut accepted: Vec<Prepared<L>> = Vec::with_capacity(cfg.simplices);
    let mut rejected = 0u32;
    while accepted.len() < cfg.simplices {
        let mut placed = false;
        for _ in 0..cfg.max_attempts {
            let s = random_simplex::<L, _>(&mut rng, cfg)?;
            let cand = Prepared::<L>::new(&s)?;
            let mut clash = false;
            for other in &accepted {
                if interiors_overlap(other, &cand, cfg.geom)? {
                    clash = true;
                    break;
                }
            }
            if clash {
                rejected += 1;
                continue;
            }
            accepted.push(cand);
            placed = true;
            break;
        }
        if !placed {
            return Err(RandomError::Exhausted {
                attempts: cfg.max_attempts,
            });
        }
    }
    debug!(lattice = L::NAME, seed = tok.seed, index = tok.index, rejected, "random domain");
    let simplices = accepted.into_iter().map(|p| p.simplex).collect();
    Ok(Polytope::from_simplices_unchecked(simplices))
}

/// Stream of random domains driven by a master seed.
pub struct RandomDomains<L: Lattice> {
    cfg: RandomCfg,
    seed: u64,
    master_rng: StdRng,
    _lattice: std::marker::PhantomData<L>,
}

impl<L: Lattice> RandomDomains<L> {
    pub fn new(cfg: RandomCfg, seed: u64) -> Result<Self, RandomError> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            seed,
            master_rng: StdRng::seed_from_u64(seed),
            _lattice: std::marker::PhantomData,
        })
    }

    pub fn cfg(&self) -> &RandomCfg {
        &self.cfg
    }

    pub fn generate_next(&mut self) -> Result<Sample<L>, RandomError> {
        let replay = ReplayToken {
            seed: self.seed,
            index: self.master_rng.next_u64(),
        };
        let polytope = random_polytope(&self.cfg, replay)?;
        Ok(Sample { polytope, replay })
    }

    pub fn regenerate(&self, replay: &ReplayToken) -> Result<Polytope<L>, RandomError> {
        random_polytope(&self.cfg, *replay)
    }
}
