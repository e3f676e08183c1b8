//! Exact scalars `(p + q·α) / r` in Q(α).
//!
//! Canonical form: `gcd(p, q, r) = 1`, `r > 0`, zero is `(0, 0, 1)`. Because
//! `{1, α}` is a Q-basis, two values are equal iff their canonical triples
//! are equal, so `Eq`/`Hash` are structural and `Ord` (exact sign of the
//! difference) is consistent with them.
//!
//! Overflow policy: coefficients are `i128` and every step is checked. The
//! `checked_*` methods surface `AlgError::Overflow`; the operator traits
//! panic on overflow, as integer operators do.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use super::generator::Generator;
use super::AlgError;

/// Exact value `(p + q·α) / r` over the generator `G`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alg<G: Generator> {
    p: i128,
    q: i128,
    r: i128,
    _g: PhantomData<G>,
}

#[inline]
fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

#[inline]
fn cmul(a: i128, b: i128) -> Result<i128, AlgError> {
    a.checked_mul(b).ok_or(AlgError::Overflow)
}

#[inline]
fn cadd(a: i128, b: i128) -> Result<i128, AlgError> {
    a.checked_add(b).ok_or(AlgError::Overflow)
}

impl<G: Generator> Alg<G> {
    /// Reduce an arbitrary triple to canonical form.
    pub(crate) fn canonical(p: i128, q: i128, r: i128) -> Result<Self, AlgError> {
        if r == 0 {
            return Err(AlgError::ZeroDenominator);
        }
        if p == 0 && q == 0 {
            return Ok(Self::zero());
        }
        let g = gcd(gcd(p.unsigned_abs(), q.unsigned_abs()), r.unsigned_abs());
        let g = i128::try_from(g).map_err(|_| AlgError::Overflow)?;
        let (mut p, mut q, mut r) = (p / g, q / g, r / g);
        if r < 0 {
            p = p.checked_neg().ok_or(AlgError::Overflow)?;
            q = q.checked_neg().ok_or(AlgError::Overflow)?;
            r = r.checked_neg().ok_or(AlgError::Overflow)?;
        }
        Ok(Self {
            p,
            q,
            r,
            _g: PhantomData,
        })
    }

    /// Build `(p + qα)/r`, normalizing to canonical form.
    pub fn new(p: i64, q: i64, r: i64) -> Result<Self, AlgError> {
        Self::canonical(p as i128, q as i128, r as i128)
    }

    /// Build from a triple that must already be canonical.
    ///
    /// Used at input boundaries where a non-canonical literal indicates
    /// malformed data rather than something to coerce.
    pub fn from_canonical(p: i64, q: i64, r: i64) -> Result<Self, AlgError> {
        let v = Self::new(p, q, r)?;
        if v.p != p as i128 || v.q != q as i128 || v.r != r as i128 {
            return Err(AlgError::NonCanonical { p, q, r });
        }
        Ok(v)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self {
            p: 0,
            q: 0,
            r: 1,
            _g: PhantomData,
        }
    }

    #[inline]
    pub const fn one() -> Self {
        Self {
            p: 1,
            q: 0,
            r: 1,
            _g: PhantomData,
        }
    }

    /// The generator α itself.
    #[inline]
    pub const fn alpha() -> Self {
        Self {
            p: 0,
            q: 1,
            r: 1,
            _g: PhantomData,
        }
    }

    #[inline]
    pub const fn from_int(n: i64) -> Self {
        Self {
            p: n as i128,
            q: 0,
            r: 1,
            _g: PhantomData,
        }
    }

    /// `1 / n`. Panics if `n == 0`.
    #[inline]
    pub const fn unit_fraction(n: u32) -> Self {
        assert!(n > 0, "unit_fraction of zero");
        Self {
            p: 1,
            q: 0,
            r: n as i128,
            _g: PhantomData,
        }
    }

    /// Rational `n / d`.
    pub fn from_ratio(n: i64, d: i64) -> Result<Self, AlgError> {
        Self::new(n, 0, d)
    }

    #[inline]
    pub fn p(&self) -> i128 {
        self.p
    }
    #[inline]
    pub fn q(&self) -> i128 {
        self.q
    }
    #[inline]
    pub fn r(&self) -> i128 {
        self.r
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.p == 0 && self.q == 0
    }

    #[inline]
    pub fn is_rational(&self) -> bool {
        self.q == 0
    }

    /// Float evaluation `(p + q·ᾱ)/r`.
    #[inline]
    pub fn to_f64(&self) -> f64 {
        (self.p as f64 + self.q as f64 * G::value()) / self.r as f64
    }

    pub fn checked_add(self, rhs: Self) -> Result<Self, AlgError> {
        if self.r == rhs.r {
            return Self::canonical(cadd(self.p, rhs.p)?, cadd(self.q, rhs.q)?, self.r);
        }
        // over lcm(r, r') so shared denominator factors are not squared
        let g = gcd(self.r.unsigned_abs(), rhs.r.unsigned_abs()) as i128;
        let (ls, rs) = (rhs.r / g, self.r / g);
        let p = cadd(cmul(self.p, ls)?, cmul(rhs.p, rs)?)?;
        let q = cadd(cmul(self.q, ls)?, cmul(rhs.q, rs)?)?;
        Self::canonical(p, q, cmul(self.r, ls)?)
    }

    pub fn checked_neg(self) -> Result<Self, AlgError> {
        let p = self.p.checked_neg().ok_or(AlgError::Overflow)?;
        let q = self.q.checked_neg().ok_or(AlgError::Overflow)?;
        Ok(Self {
            p,
            q,
            r: self.r,
            _g: PhantomData,
        })
    }

    pub fn checked_sub(self, rhs: Self) -> Result<Self, AlgError> {
        self.checked_add(rhs.checked_neg()?)
    }

    /// Product via `α² = S·α + T`.
    pub fn checked_mul(self, rhs: Self) -> Result<Self, AlgError> {
        // cancel each numerator against the other denominator first
        let (g1, g2) = (self.common_factor(rhs.r), rhs.common_factor(self.r));
        let (p1, q1, r1) = (self.p / g1, self.q / g1, self.r / g2);
        let (p2, q2, r2) = (rhs.p / g2, rhs.q / g2, rhs.r / g1);
        let qq = cmul(q1, q2)?;
        let p = cadd(cmul(p1, p2)?, cmul(G::T, qq)?)?;
        let q = cadd(cadd(cmul(p1, q2)?, cmul(q1, p2)?)?, cmul(G::S, qq)?)?;
        Self::canonical(p, q, cmul(r1, r2)?)
    }

    /// `gcd(p, q, den)` for a positive `den`.
    #[inline]
    fn common_factor(&self, den: i128) -> i128 {
        // divides den, so it fits
        gcd(gcd(self.p.unsigned_abs(), self.q.unsigned_abs()), den.unsigned_abs()) as i128
    }

    /// Multiply by an integer.
    pub fn checked_mul_int(self, k: i64) -> Result<Self, AlgError> {
        let k = k as i128;
        Self::canonical(cmul(self.p, k)?, cmul(self.q, k)?, self.r)
    }

    /// Galois conjugate: α ↦ S − α.
    pub fn conj(self) -> Self {
        // (p + qα) ↦ (p + qS) − qα
        Self::canonical(self.p + self.q * G::S, -self.q, self.r)
            .unwrap_or_else(|e| panic!("conjugate of {self}: {e}"))
    }

    /// Rational norm `x · conj(x)`, returned as an `Alg` with `q = 0`.
    pub fn norm(self) -> Result<Self, AlgError> {
        let (num, den) = self.norm_parts()?;
        Self::canonical(num, 0, den)
    }

    /// Integer numerator `p² + pqS − q²T` and denominator `r²` of the norm.
    fn norm_parts(self) -> Result<(i128, i128), AlgError> {
        let pq = cmul(self.p, self.q)?;
        let num = cadd(
            cadd(cmul(self.p, self.p)?, cmul(pq, G::S)?)?,
            -cmul(cmul(self.q, self.q)?, G::T)?,
        )?;
        Ok((num, cmul(self.r, self.r)?))
    }

    /// Multiplicative inverse; `DivisionByZero` for zero.
    pub fn recip(self) -> Result<Self, AlgError> {
        if self.is_zero() {
            return Err(AlgError::DivisionByZero);
        }
        // r / (p + qα) = r·((p + qS) − qα) / (p² + pqS − q²T)
        let (n, _) = self.norm_parts()?;
        let cp = cmul(self.r, cadd(self.p, cmul(self.q, G::S)?)?)?;
        let cq = cmul(self.r, -self.q)?;
        Self::canonical(cp, cq, n)
    }

    /// Exact division; fails with `DivisionByZero` when `rhs` is zero.
    pub fn try_div(self, rhs: Self) -> Result<Self, AlgError> {
        self.checked_mul(rhs.recip()?)
    }

    /// Exact sign: -1, 0 or 1.
    ///
    /// `(p + qα)/r` has the sign of `x + y√D` with `x = 2p + qS`, `y = q`,
    /// decided by comparing `x²` and `y²D` when the signs of `x` and `y`
    /// differ.
    pub fn signum(&self) -> i32 {
        let sx = |v: i128| v.signum() as i32;
        let x = match self
            .q
            .checked_mul(G::S)
            .and_then(|qs| self.p.checked_mul(2)?.checked_add(qs))
        {
            Some(x) => x,
            None => return sx_f64(self.to_f64()),
        };
        let y = self.q;
        if y == 0 {
            return sx(x);
        }
        if x == 0 || x.signum() == y.signum() {
            return sx(y);
        }
        let d = G::discriminant();
        let lhs = x.checked_mul(x);
        let rhs = y.checked_mul(y).and_then(|yy| yy.checked_mul(d));
        match (lhs, rhs) {
            (Some(xx), Some(yyd)) => {
                // x and y have opposite signs; the larger magnitude wins.
                match xx.cmp(&yyd) {
                    Ordering::Greater => sx(x),
                    Ordering::Less => sx(y),
                    Ordering::Equal => 0,
                }
            }
            _ => sx_f64(self.to_f64()),
        }
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.signum() > 0
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.signum() < 0
    }

    pub fn abs(self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self
        }
    }

    pub fn checked_abs(self) -> Result<Self, AlgError> {
        if self.is_negative() {
            self.checked_neg()
        } else {
            Ok(self)
        }
    }
}

#[inline]
fn sx_f64(v: f64) -> i32 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

impl<G: Generator> Default for Alg<G> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<G: Generator> From<i64> for Alg<G> {
    fn from(n: i64) -> Self {
        Self::from_int(n)
    }
}

impl<G: Generator> Add for Alg<G> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.checked_add(rhs)
            .unwrap_or_else(|e| panic!("{self} + {rhs}: {e}"))
    }
}

impl<G: Generator> Sub for Alg<G> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.checked_sub(rhs)
            .unwrap_or_else(|e| panic!("{self} - {rhs}: {e}"))
    }
}

impl<G: Generator> Mul for Alg<G> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.checked_mul(rhs)
            .unwrap_or_else(|e| panic!("{self} * {rhs}: {e}"))
    }
}

impl<G: Generator> Mul<i64> for Alg<G> {
    type Output = Self;
    #[inline]
    fn mul(self, k: i64) -> Self {
        self.checked_mul_int(k)
            .unwrap_or_else(|e| panic!("{self} * {k}: {e}"))
    }
}

impl<G: Generator> Neg for Alg<G> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.checked_neg()
            .unwrap_or_else(|e| panic!("-({self}): {e}"))
    }
}

impl<G: Generator> AddAssign for Alg<G> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<G: Generator> SubAssign for Alg<G> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<G: Generator> Sum for Alg<G> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<G: Generator> PartialOrd for Alg<G> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<G: Generator> Ord for Alg<G> {
    /// Exact sign of the difference. A difference beyond `i128` is ordered
    /// by its float value.
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }
        match self.checked_sub(*other) {
            Ok(d) => d.signum().cmp(&0),
            Err(_) => self.to_f64().total_cmp(&other.to_f64()),
        }
    }
}

impl<G: Generator> fmt::Display for Alg<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num = match (self.p, self.q) {
            (p, 0) => format!("{p}"),
            (0, q) => format!("{q}{}", G::SYMBOL),
            (p, q) if q < 0 => format!("{p}{q}{}", G::SYMBOL),
            (p, q) => format!("{p}+{q}{}", G::SYMBOL),
        };
        if self.r == 1 {
            write!(f, "{num}")
        } else if self.q == 0 {
            write!(f, "{num}/{}", self.r)
        } else {
            write!(f, "({num})/{}", self.r)
        }
    }
}

impl<G: Generator> fmt::Debug for Alg<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alg[{}]", self)
    }
}
