pub use crate::{
    combinations::{binomial, combinations, Combinations},
    error::{MathError, Result},
    lagrange::{interpolate_at_zero, lagrange_coefficient_at_zero},
    point::Point,
    radix::{decode, encode, parse_base, MAX_BASE, MIN_BASE},
    traits::PointSource,
};
