//! circum - Immutable 2D vector and circle value types
//!
//! The building blocks for circle geometry: a [`Vector2`] with the usual
//! arithmetic, rotation and polar helpers, and a [`Circle`] whose radius is
//! checked once at construction. Both compare and hash by the raw IEEE-754
//! bits of their fields rather than by numeric value.

pub mod bits;
pub mod error;
pub mod primitives;

pub use bits::RawBits;
pub use error::GeomError;
pub use primitives::{Circle, Vector2};
