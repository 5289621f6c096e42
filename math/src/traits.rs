use num_bigint::BigInt;

use crate::point::Point;

/// Abstract source of an interpolation point.
pub trait PointSource {
    /// The x-coordinate (share label).
    fn x(&self) -> u64;

    /// The y-coordinate (decoded share value).
    fn y(&self) -> &BigInt;
}

impl PointSource for Point {
    fn x(&self) -> u64 {
        self.x
    }

    fn y(&self) -> &BigInt {
        &self.y
    }
}

impl<T: PointSource + ?Sized> PointSource for &T {
    fn x(&self) -> u64 {
        (**self).x()
    }

    fn y(&self) -> &BigInt {
        (**self).y()
    }
}
