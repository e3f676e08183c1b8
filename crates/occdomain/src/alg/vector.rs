//! Fixed-size vectors of exact scalars.
//!
//! - `AlgVec<G, N>`: value-semantics array with componentwise arithmetic.
//! - `LatticeVector<G>`: 6D lattice vertex or displacement.
//! - `Exact3<G>`: exact physical/internal-space coordinates.

use std::fmt;
use std::ops::{Add, Index, IndexMut, Neg, Sub};

use nalgebra::SVector;

use super::generator::Generator;
use super::value::Alg;
use super::AlgError;

/// Fixed-size vector of `Alg<G>`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlgVec<G: Generator, const N: usize>(pub [Alg<G>; N]);

/// Vertex or displacement in the 6D lattice.
pub type LatticeVector<G> = AlgVec<G, 6>;
/// Exact coordinates in a 3D subspace (physical or internal).
pub type Exact3<G> = AlgVec<G, 3>;

impl<G: Generator, const N: usize> AlgVec<G, N> {
    #[inline]
    pub fn zeros() -> Self {
        Self([Alg::zero(); N])
    }

    /// Integer coordinates.
    pub fn from_ints(ints: [i64; N]) -> Self {
        Self(ints.map(Alg::from_int))
    }

    /// Literal `(p, q, r)` triples; each must already be canonical.
    pub fn from_triples(triples: [[i64; 3]; N]) -> Result<Self, AlgError> {
        let mut out = Self::zeros();
        for (slot, [p, q, r]) in out.0.iter_mut().zip(triples) {
            *slot = Alg::from_canonical(p, q, r)?;
        }
        Ok(out)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Alg<G>] {
        &self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(Alg::is_zero)
    }

    /// Multiply every component by `s`.
    pub fn scale(&self, s: Alg<G>) -> Self {
        Self(self.0.map(|x| x * s))
    }

    pub fn dot(&self, other: &Self) -> Alg<G> {
        self.0.iter().zip(other.0.iter()).map(|(&a, &b)| a * b).sum()
    }

    /// Outer product `self · otherᵀ`.
    pub fn outer<const M: usize>(&self, other: &AlgVec<G, M>) -> [[Alg<G>; M]; N] {
        let mut out = [[Alg::zero(); M]; N];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.0[i] * other.0[j];
            }
        }
        out
    }

    /// `self + t·(other − self)`.
    pub fn lerp(&self, other: &Self, t: Alg<G>) -> Self {
        let mut out = *self;
        for i in 0..N {
            out.0[i] += (other.0[i] - self.0[i]) * t;
        }
        out
    }

    pub fn checked_add(&self, other: &Self) -> Result<Self, AlgError> {
        let mut out = *self;
        for (x, &y) in out.0.iter_mut().zip(&other.0) {
            *x = x.checked_add(y)?;
        }
        Ok(out)
    }

    pub fn checked_sub(&self, other: &Self) -> Result<Self, AlgError> {
        let mut out = *self;
        for (x, &y) in out.0.iter_mut().zip(&other.0) {
            *x = x.checked_sub(y)?;
        }
        Ok(out)
    }

    pub fn checked_neg(&self) -> Result<Self, AlgError> {
        let mut out = *self;
        for x in out.0.iter_mut() {
            *x = x.checked_neg()?;
        }
        Ok(out)
    }

    pub fn checked_scale(&self, s: Alg<G>) -> Result<Self, AlgError> {
        let mut out = *self;
        for x in out.0.iter_mut() {
            *x = x.checked_mul(s)?;
        }
        Ok(out)
    }

    pub fn checked_dot(&self, other: &Self) -> Result<Alg<G>, AlgError> {
        self.0
            .iter()
            .zip(&other.0)
            .try_fold(Alg::zero(), |acc, (&a, &b)| acc.checked_add(a.checked_mul(b)?))
    }

    /// `self + t·(other − self)`, checked.
    pub fn checked_lerp(&self, other: &Self, t: Alg<G>) -> Result<Self, AlgError> {
        self.checked_add(&other.checked_sub(self)?.checked_scale(t)?)
    }

    /// Positive multiple of `self` with integer coefficients and no common
    /// factor. Spans the same direction with the smallest coefficients.
    pub fn primitive(&self) -> Result<Self, AlgError> {
        if self.is_zero() {
            return Ok(*self);
        }
        let mut den: i128 = 1;
        for x in &self.0 {
            let g = gcd_i128(den, x.r())?;
            den = (den / g).checked_mul(x.r()).ok_or(AlgError::Overflow)?;
        }
        let mut ints = [(0i128, 0i128); N];
        let mut content: i128 = 0;
        for (slot, x) in ints.iter_mut().zip(&self.0) {
            let k = den / x.r();
            let p = x.p().checked_mul(k).ok_or(AlgError::Overflow)?;
            let q = x.q().checked_mul(k).ok_or(AlgError::Overflow)?;
            content = gcd_i128(gcd_i128(content, p)?, q)?;
            *slot = (p, q);
        }
        let mut out = Self::zeros();
        for (x, (p, q)) in out.0.iter_mut().zip(ints) {
            *x = Alg::canonical(p / content, q / content, 1)?;
        }
        Ok(out)
    }

    /// Float evaluation of every component.
    pub fn to_f64(&self) -> SVector<f64, N> {
        SVector::<f64, N>::from_fn(|i, _| self.0[i].to_f64())
    }
}

impl<G: Generator> Exact3<G> {
    pub fn new(x: Alg<G>, y: Alg<G>, z: Alg<G>) -> Self {
        Self([x, y, z])
    }

    pub fn cross(&self, o: &Self) -> Self {
        let [a0, a1, a2] = self.0;
        let [b0, b1, b2] = o.0;
        Self([a1 * b2 - a2 * b1, a2 * b0 - a0 * b2, a0 * b1 - a1 * b0])
    }

    pub fn checked_cross(&self, o: &Self) -> Result<Self, AlgError> {
        let [a0, a1, a2] = self.0;
        let [b0, b1, b2] = o.0;
        let det = |x: Alg<G>, y: Alg<G>, z: Alg<G>, w: Alg<G>| x.checked_mul(y)?.checked_sub(z.checked_mul(w)?);
        Ok(Self([det(a1, b2, a2, b1)?, det(a2, b0, a0, b2)?, det(a0, b1, a1, b0)?]))
    }
}

/// Non-negative gcd; `gcd(0, 0) = 0`.
fn gcd_i128(a: i128, b: i128) -> Result<i128, AlgError> {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    i128::try_from(a).map_err(|_| AlgError::Overflow)
}

impl<G: Generator, const N: usize> Default for AlgVec<G, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<G: Generator, const N: usize> Index<usize> for AlgVec<G, N> {
    type Output = Alg<G>;
    #[inline]
    fn index(&self, i: usize) -> &Alg<G> {
        &self.0[i]
    }
}

impl<G: Generator, const N: usize> IndexMut<usize> for AlgVec<G, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Alg<G> {
        &mut self.0[i]
    }
}

impl<G: Generator, const N: usize> Add for AlgVec<G, N> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let mut out = self;
        for i in 0..N {
            out.0[i] += rhs.0[i];
        }
        out
    }
}

impl<G: Generator, const N: usize> Sub for AlgVec<G, N> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        let mut out = self;
        for i in 0..N {
            out.0[i] -= rhs.0[i];
        }
        out
    }
}

impl<G: Generator, const N: usize> Neg for AlgVec<G, N> {
    type Output = Self;
    fn neg(self) -> Self {
        Self(self.0.map(|x| -x))
    }
}

impl<G: Generator, const N: usize> fmt::Debug for AlgVec<G, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{x}")?;
        }
        f.write_str("]")
    }
}
