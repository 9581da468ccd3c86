//! Fixed-dimension vectors of `f64`
//!
//! [`Vector`] wraps a `nalgebra` column vector and adds the behaviour the
//! simulation relies on: tolerant equality, `%g`-style display and fallible
//! `normalize`/`cross`.

use std::fmt;
use std::iter::Sum;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use nalgebra::SVector;
use serde::{Deserialize, Serialize};

use crate::error::{NbodyError, Result};
use crate::format;

/// Absolute tolerance used by `==`
pub const EPSILON: f64 = 1e-10;

/// An immutable-by-value vector of `D` doubles
///
/// # Examples
///
/// ```
/// use nbody::vector::Vector2;
///
/// let a = Vector2::new(1.0, 2.0);
/// let b = Vector2::new(3.0, 4.0);
///
/// assert_eq!(a + b, Vector2::new(4.0, 6.0));
/// assert_eq!(2.0 * a, a * 2.0);
/// assert_eq!(b.norm(), 5.0);
/// assert_eq!(a.to_string(), "[1 2]");
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector<const D: usize>(SVector<f64, D>);

/// Two-dimensional vector used for positions, velocities and forces
pub type Vector2 = Vector<2>;
pub type Vector3 = Vector<3>;
pub type Vector4 = Vector<4>;

impl<const D: usize> Vector<D> {
    /// The zero vector
    pub fn zeros() -> Self {
        Self(SVector::zeros())
    }

    pub fn from_array(components: [f64; D]) -> Self {
        Self(SVector::from(components))
    }

    pub fn as_nalgebra(&self) -> &SVector<f64, D> {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.0.iter()
    }

    pub fn add(&self, rhs: &Self) -> Self {
        Self(self.0 + rhs.0)
    }

    /// Scales a copy of this vector by `factor`
    pub fn scale(&self, factor: f64) -> Self {
        Self(self.0 * factor)
    }

    /// The additive inverse
    pub fn invert(&self) -> Self {
        self.scale(-1.0)
    }

    /// Inner product, accumulated component by component in index order
    pub fn dot(&self, rhs: &Self) -> f64 {
        self.iter()
            .zip(rhs.iter())
            .fold(0.0, |acc, (l, r)| acc + l * r)
    }

    pub fn norm_sq(&self) -> f64 {
        self.dot(self)
    }

    pub fn norm(&self) -> f64 {
        self.norm_sq().sqrt()
    }

    /// Returns a copy scaled to unit length
    ///
    /// Fails with [`NbodyError::Domain`] when the norm is exactly zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::vector::Vector2;
    ///
    /// let unit = Vector2::new(3.0, 4.0).normalize().unwrap();
    /// assert_eq!(unit, Vector2::new(0.6, 0.8));
    ///
    /// assert!(Vector2::zeros().normalize().is_err());
    /// ```
    pub fn normalize(&self) -> Result<Self> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err(NbodyError::domain("vector norm is zero"));
        }
        Ok(*self / norm)
    }

    /// Cross product, defined only for three-dimensional vectors
    ///
    /// Every other dimension fails with [`NbodyError::Domain`].
    pub fn cross(&self, rhs: &Self) -> Result<Self> {
        if D != 3 {
            return Err(NbodyError::domain("Operation not supported"));
        }
        let (a, b) = (&self.0, &rhs.0);
        let mut c = Self::zeros();
        c.0[0] = a[1] * b[2] - a[2] * b[1];
        c.0[1] = a[2] * b[0] - a[0] * b[2];
        c.0[2] = a[0] * b[1] - a[1] * b[0];
        Ok(c)
    }
}

impl Vector<2> {
    pub fn new(x: f64, y: f64) -> Self {
        Self::from_array([x, y])
    }

    pub fn x(&self) -> f64 {
        self.0[0]
    }

    pub fn y(&self) -> f64 {
        self.0[1]
    }
}

impl Vector<3> {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::from_array([x, y, z])
    }
}

impl<const D: usize> Default for Vector<D> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const D: usize> From<[f64; D]> for Vector<D> {
    fn from(components: [f64; D]) -> Self {
        Self::from_array(components)
    }
}

impl<const D: usize> From<SVector<f64, D>> for Vector<D> {
    fn from(inner: SVector<f64, D>) -> Self {
        Self(inner)
    }
}

impl<const D: usize> From<Vector<D>> for SVector<f64, D> {
    fn from(vector: Vector<D>) -> Self {
        vector.0
    }
}

/// Component-wise comparison: exactly equal, or closer than [`EPSILON`]
impl<const D: usize> PartialEq for Vector<D> {
    fn eq(&self, other: &Self) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(l, r)| l == r || (r - l).abs() < EPSILON)
    }
}

/// `[x y ...]` with each component in `%g` notation
impl<const D: usize> fmt::Display for Vector<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let components: Vec<String> = self.iter().map(|&c| format::general(c)).collect();
        write!(f, "[{}]", components.join(" "))
    }
}

/// Out-of-range access panics
impl<const D: usize> Index<usize> for Vector<D> {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl<const D: usize> IndexMut<usize> for Vector<D> {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.0[index]
    }
}

impl<const D: usize> Add for Vector<D> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Vector::add(&self, &rhs)
    }
}

impl<const D: usize> AddAssign for Vector<D> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const D: usize> Neg for Vector<D> {
    type Output = Self;

    fn neg(self) -> Self {
        self.invert()
    }
}

impl<const D: usize> Sub for Vector<D> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl<const D: usize> SubAssign for Vector<D> {
    fn sub_assign(&mut self, rhs: Self) {
        *self += -rhs;
    }
}

impl<const D: usize> Mul<f64> for Vector<D> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl<const D: usize> Mul<Vector<D>> for f64 {
    type Output = Vector<D>;

    fn mul(self, rhs: Vector<D>) -> Vector<D> {
        rhs * self
    }
}

impl<const D: usize> MulAssign<f64> for Vector<D> {
    fn mul_assign(&mut self, rhs: f64) {
        *self = self.scale(rhs);
    }
}

/// Scales by the reciprocal, matching the reference arithmetic
impl<const D: usize> Div<f64> for Vector<D> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        self.scale(1.0 / rhs)
    }
}

impl<const D: usize> DivAssign<f64> for Vector<D> {
    fn div_assign(&mut self, rhs: f64) {
        *self *= 1.0 / rhs;
    }
}

impl<const D: usize> Sum for Vector<D> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zeros(), |acc, v| acc + v)
    }
}
