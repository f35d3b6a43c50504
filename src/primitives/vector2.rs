//! 2D vector value type.

use crate::bits::{fold_bits, mix, RawBits, HASH_SEED};
use num_traits::Float;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

/// An immutable 2D Euclidean vector.
///
/// Every operation returns a new value. Equality and hashing compare the raw
/// bit patterns of both components, so `+0.0` and `-0.0` are distinct and a
/// NaN component equals itself when the payloads match.
///
/// Degenerate inputs are never rejected: normalizing the zero vector yields
/// NaN components, exactly as IEEE-754 division says it should.
///
/// # Example
///
/// ```
/// use circum::Vector2;
///
/// let v = Vector2::new(3.0, 4.0);
/// assert_eq!(v.modulus(), 5.0);
/// assert_eq!(v.rot_plus_90(), Vector2::new(-4.0, 3.0));
/// assert_eq!(v.to_string(), "Vector2(3.0, 4.0)");
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2<F> {
    pub x: F,
    pub y: F,
}

impl<F> Vector2<F> {
    /// Creates a new vector.
    #[inline]
    pub const fn new(x: F, y: F) -> Self {
        Self { x, y }
    }
}

impl Vector2<f64> {
    /// The zero vector.
    pub const NULL: Self = Self::new(0.0, 0.0);
    /// Unit vector along the X axis.
    pub const X: Self = Self::new(1.0, 0.0);
    /// Unit vector along the Y axis.
    pub const Y: Self = Self::new(0.0, 1.0);
}

impl Vector2<f32> {
    /// The zero vector.
    pub const NULL: Self = Self::new(0.0, 0.0);
    /// Unit vector along the X axis.
    pub const X: Self = Self::new(1.0, 0.0);
    /// Unit vector along the Y axis.
    pub const Y: Self = Self::new(0.0, 1.0);
}

#[allow(clippy::should_implement_trait)]
impl<F: Float> Vector2<F> {
    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::new(F::zero(), F::zero())
    }

    /// Creates a unit vector along the X axis.
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(F::one(), F::zero())
    }

    /// Creates a unit vector along the Y axis.
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(F::zero(), F::one())
    }

    /// Creates the unit vector `(cos θ, sin θ)`.
    #[inline]
    pub fn from_angle(angle: F) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    /// Creates the vector `(m cos θ, m sin θ)` from polar coordinates.
    #[inline]
    pub fn from_polar(angle: F, modulus: F) -> Self {
        Self::new(modulus * angle.cos(), modulus * angle.sin())
    }

    /// Componentwise sum.
    #[inline]
    pub fn add(self, other: Self) -> Self {
        self + other
    }

    /// Componentwise difference.
    #[inline]
    pub fn sub(self, other: Self) -> Self {
        self - other
    }

    /// Componentwise negation.
    #[inline]
    pub fn neg(self) -> Self {
        -self
    }

    /// Multiplies both components by `k`.
    #[inline]
    pub fn scale(self, k: F) -> Self {
        self * k
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Returns the squared Euclidean norm.
    #[inline]
    pub fn mod_squared(self) -> F {
        self.dot(self)
    }

    /// Returns the Euclidean norm.
    #[inline]
    pub fn modulus(self) -> F {
        self.mod_squared().sqrt()
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// Scales by the reciprocal of the norm. The zero vector gives NaN
    /// components; nothing is guarded.
    #[inline]
    pub fn normalize(self) -> Self {
        self.scale(F::one() / self.modulus())
    }

    /// Rotates 90 degrees counter-clockwise: `(-y, x)`.
    #[inline]
    pub fn rot_plus_90(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Rotates 90 degrees clockwise: `(y, -x)`.
    #[inline]
    pub fn rot_minus_90(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Returns `atan2(y, x)`, the angle from the positive X axis in `[-π, π]`.
    #[inline]
    pub fn angle(self) -> F {
        self.y.atan2(self.x)
    }
}

impl<F: RawBits> Vector2<F> {
    /// Compares both components by raw bit pattern.
    #[inline]
    pub fn bits_eq(&self, other: &Self) -> bool {
        self.x.bits_eq(other.x) && self.y.bits_eq(other.y)
    }

    /// Returns the 32-bit hash of the component bit patterns, `x` mixed first.
    pub fn hash_code(&self) -> i32 {
        let h = mix(HASH_SEED, fold_bits(self.x.raw_bits()));
        mix(h, fold_bits(self.y.raw_bits()))
    }
}

impl<F: RawBits> PartialEq for Vector2<F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.bits_eq(other)
    }
}

impl<F: RawBits> Eq for Vector2<F> {}

impl<F: RawBits> Hash for Vector2<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_code().hash(state);
    }
}

impl<F: fmt::Debug> fmt::Display for Vector2<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2({:?}, {:?})", self.x, self.y)
    }
}

impl<F: Float> Add for Vector2<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<F: Float> Sub for Vector2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<F: Float> Mul<F> for Vector2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, k: F) -> Self {
        Self {
            x: k * self.x,
            y: k * self.y,
        }
    }
}

impl<F: Float> Neg for Vector2<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<F: Float> Default for Vector2<F> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<F> From<(F, F)> for Vector2<F> {
    #[inline]
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

impl<F> From<Vector2<F>> for (F, F) {
    #[inline]
    fn from(v: Vector2<F>) -> Self {
        (v.x, v.y)
    }
}
