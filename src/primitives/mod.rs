//! Immutable 2D value types.

mod circle;
mod vector2;

pub use circle::Circle;
pub use vector2::Vector2;
