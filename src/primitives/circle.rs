//! Circle value type.

use super::Vector2;
use crate::bits::{fold_bits, mix, RawBits, HASH_SEED};
use crate::error::GeomError;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An immutable circle with a strictly positive radius.
///
/// The radius check runs at construction (and on deserialization), so every
/// `Circle` in existence satisfies `radius > 0`. A NaN radius is rejected;
/// an infinite one is accepted.
///
/// # Example
///
/// ```
/// use circum::{Circle, GeomError, Vector2};
///
/// let circle = Circle::new(Vector2::<f64>::NULL, 1.0)?;
/// assert_eq!(circle.radius(), 1.0);
/// assert_eq!(circle.to_string(), "Circle(c: Vector2(0.0, 0.0), r: 1.0)");
///
/// assert!(Circle::new(Vector2::<f64>::NULL, 0.0).is_err());
/// # Ok::<(), GeomError>(())
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "CircleRepr<F>",
        bound(deserialize = "F: RawBits + serde::Deserialize<'de>")
    )
)]
pub struct Circle<F> {
    center: Vector2<F>,
    radius: F,
}

impl<F: RawBits> Circle<F> {
    /// Creates a circle, rejecting any radius that is not strictly positive.
    pub fn new(center: Vector2<F>, radius: F) -> Result<Self, GeomError> {
        if radius.is_nan() || radius <= F::zero() {
            let radius = radius.to_f64().unwrap_or(f64::NAN);
            tracing::debug!(radius, "rejected circle with non-positive radius");
            return Err(GeomError::InvalidArgument { radius });
        }
        Ok(Self { center, radius })
    }

    /// Creates a circle from center coordinates and radius.
    #[inline]
    pub fn from_coords(cx: F, cy: F, radius: F) -> Result<Self, GeomError> {
        Self::new(Vector2::new(cx, cy), radius)
    }

    /// Returns the center.
    #[inline]
    pub fn center(&self) -> Vector2<F> {
        self.center
    }

    /// Returns the radius.
    #[inline]
    pub fn radius(&self) -> F {
        self.radius
    }

    /// Returns the 32-bit hash of center and radius, center mixed first.
    pub fn hash_code(&self) -> i32 {
        let h = mix(HASH_SEED, self.center.hash_code());
        mix(h, fold_bits(self.radius.raw_bits()))
    }
}

impl<F: RawBits> PartialEq for Circle<F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.center.bits_eq(&other.center) && self.radius.bits_eq(other.radius)
    }
}

impl<F: RawBits> Eq for Circle<F> {}

impl<F: RawBits> Hash for Circle<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_code().hash(state);
    }
}

impl<F: fmt::Debug> fmt::Display for Circle<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle(c: {}, r: {:?})", self.center, self.radius)
    }
}

/// Unchecked wire form of [`Circle`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename = "Circle")]
struct CircleRepr<F> {
    center: Vector2<F>,
    radius: F,
}

#[cfg(feature = "serde")]
impl<F: RawBits> TryFrom<CircleRepr<F>> for Circle<F> {
    type Error = GeomError;

    fn try_from(repr: CircleRepr<F>) -> Result<Self, Self::Error> {
        Self::new(repr.center, repr.radius)
    }
}
