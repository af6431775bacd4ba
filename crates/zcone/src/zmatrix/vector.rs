//! Dense integer vector.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Index, IndexMut, Neg, Sub};

use nalgebra::DVector;
use num_bigint::BigInt;
use num_integer::Integer as _;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/// Integer vector with arbitrary-precision entries.
///
/// Invariants:
/// - None beyond the length; entries are unconstrained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZVector(pub(crate) DVector<BigInt>);

impl ZVector {
    #[inline]
    pub fn zeros(n: usize) -> Self {
        Self(DVector::from_element(n, BigInt::zero()))
    }

    #[inline]
    pub fn from_vec(entries: Vec<BigInt>) -> Self {
        Self(DVector::from_vec(entries))
    }

    pub fn from_i64(entries: &[i64]) -> Self {
        Self::from_vec(entries.iter().map(|&x| BigInt::from(x)).collect())
    }

    /// Standard basis vector `e_i` in Z^n.
    pub fn unit(n: usize, i: usize) -> Self {
        let mut v = Self::zeros(n);
        v.0[i] = BigInt::one();
        v
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[BigInt] {
        self.0.as_slice()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &BigInt> {
        self.0.iter()
    }

    /// Euclidean inner product. Both vectors must have the same length.
    #[inline]
    pub fn dot(&self, other: &ZVector) -> BigInt {
        debug_assert_eq!(self.len(), other.len(), "dot of vectors with different lengths");
        self.0.dot(&other.0)
    }

    pub fn is_zero(&self) -> bool {
        self.iter().all(|x| x.is_zero())
    }

    /// All entries strictly positive (false for the empty vector).
    pub fn is_positive(&self) -> bool {
        !self.is_empty() && self.iter().all(|x| x.is_positive())
    }

    pub fn is_nonnegative(&self) -> bool {
        self.iter().all(|x| !x.is_negative())
    }

    /// Entry gcd; zero for the zero vector.
    pub fn gcd(&self) -> BigInt {
        self.iter().fold(BigInt::zero(), |g, x| g.gcd(x))
    }

    /// Divide by the entry gcd. Keeps the sign; zero stays zero.
    pub fn normalized(&self) -> ZVector {
        let g = self.gcd();
        if g.is_zero() || g.is_one() {
            return self.clone();
        }
        Self(self.0.map(|x| x / &g))
    }

    /// Primitive part of `s·self − t·other`.
    pub(crate) fn combination(&self, s: &BigInt, other: &ZVector, t: &BigInt) -> ZVector {
        debug_assert_eq!(self.len(), other.len());
        Self(self.0.zip_map(&other.0, |x, y| x * s - y * t)).normalized()
    }

    /// `self` followed by `other`.
    pub fn concat(&self, other: &ZVector) -> ZVector {
        let mut out = self.as_slice().to_vec();
        out.extend_from_slice(other.as_slice());
        Self::from_vec(out)
    }

    pub(crate) fn to_rational(&self) -> Vec<BigRational> {
        self.iter()
            .map(|x| BigRational::from_integer(x.clone()))
            .collect()
    }

    /// Smallest positive integer multiple of a rational vector, made primitive.
    pub(crate) fn from_rational_primitive(entries: &[BigRational]) -> ZVector {
        let lcm = entries
            .iter()
            .fold(BigInt::one(), |acc, q| acc.lcm(q.denom()));
        let ints = entries
            .iter()
            .map(|q| q.numer() * (&lcm / q.denom()))
            .collect();
        Self::from_vec(ints).normalized()
    }
}

impl Index<usize> for ZVector {
    type Output = BigInt;
    #[inline]
    fn index(&self, i: usize) -> &BigInt {
        &self.0[i]
    }
}

impl IndexMut<usize> for ZVector {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut BigInt {
        &mut self.0[i]
    }
}

impl Add for &ZVector {
    type Output = ZVector;
    fn add(self, rhs: &ZVector) -> ZVector {
        ZVector(&self.0 + &rhs.0)
    }
}

impl Sub for &ZVector {
    type Output = ZVector;
    fn sub(self, rhs: &ZVector) -> ZVector {
        ZVector(&self.0 - &rhs.0)
    }
}

impl Neg for &ZVector {
    type Output = ZVector;
    fn neg(self) -> ZVector {
        ZVector(-&self.0)
    }
}

impl Neg for ZVector {
    type Output = ZVector;
    fn neg(self) -> ZVector {
        ZVector(-self.0)
    }
}

impl Ord for ZVector {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.as_slice().cmp(other.as_slice()))
    }
}

impl PartialOrd for ZVector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for ZVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl From<Vec<BigInt>> for ZVector {
    fn from(entries: Vec<BigInt>) -> Self {
        Self::from_vec(entries)
    }
}

impl fmt::Display for ZVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, ")")
    }
}
