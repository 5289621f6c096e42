//! Numeric building blocks for threshold secret recovery: radix decoding,
//! subset enumeration and exact Lagrange interpolation over big integers.

pub mod combinations;
pub mod error;
pub mod lagrange;
pub mod point;
pub mod prelude;
pub mod radix;
pub mod traits;

pub use error::{MathError, Result};
pub use point::Point;
