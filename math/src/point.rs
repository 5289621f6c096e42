use std::fmt;

use num_bigint::BigInt;

/// A decoded share: label `x` and value `y`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub(crate) x: u64,
    pub(crate) y: BigInt,
}

impl Point {
    pub fn new(x: u64, y: impl Into<BigInt>) -> Self {
        Self { x, y: y.into() }
    }

    pub fn x(&self) -> u64 {
        self.x
    }

    pub fn y(&self) -> &BigInt {
        &self.y
    }

    pub fn into_parts(self) -> (u64, BigInt) {
        (self.x, self.y)
    }
}

impl<Y: Into<BigInt>> From<(u64, Y)> for Point {
    fn from((x, y): (u64, Y)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
