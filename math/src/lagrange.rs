//! Exact Lagrange interpolation at `x = 0` over signed big integers.
//!
//! For points `(x_i, y_i)` the constant term of the interpolating polynomial
//! is `sum_i y_i * L_i(0)` with `L_i(0) = prod_{j != i} (-x_j) / (x_i - x_j)`.
//! Each `L_i(0)` must be an integer: a nonzero remainder is reported as
//! [`MathError::InexactDivision`] rather than truncated.

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::error::{MathError, Result};
use crate::traits::PointSource;

/// Compute `L_i(0)` for the point at `index` within `points`.
pub fn lagrange_coefficient_at_zero<P: PointSource>(
    points: &[P],
    index: usize,
) -> Result<BigInt> {
    let available = points.len();
    let xi = points
        .get(index)
        .map(|point| point.x())
        .ok_or(MathError::InvalidSubsetSize {
            size: index + 1,
            available,
        })?;

    let mut numerator = BigInt::one();
    let mut denominator = BigInt::one();

    for (j, point) in points.iter().enumerate() {
        if j == index {
            continue;
        }
        let xj = point.x();
        if xj == xi {
            return Err(MathError::DegenerateSubset(xi));
        }
        numerator *= -BigInt::from(xj);
        denominator *= BigInt::from(xi) - BigInt::from(xj);
    }

    if denominator.is_zero() {
        return Err(MathError::DegenerateSubset(xi));
    }
    if !(&numerator % &denominator).is_zero() {
        return Err(MathError::InexactDivision(xi));
    }

    Ok(numerator / denominator)
}

/// Evaluate the polynomial through `points` at `x = 0`.
pub fn interpolate_at_zero<P: PointSource>(points: &[P]) -> Result<BigInt> {
    if points.is_empty() {
        return Err(MathError::InvalidSubsetSize {
            size: 0,
            available: 0,
        });
    }

    (0..points.len()).try_fold(BigInt::zero(), |acc, i| {
        let coefficient = lagrange_coefficient_at_zero(points, i)?;
        Ok(acc + points[i].y() * coefficient)
    })
}
