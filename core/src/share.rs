use num_bigint::BigInt;
use recovery_math::prelude::*;

use crate::error::{RecoveryError, Result};

/// A raw share: label, value literal and the base it is written in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Share {
    pub label: u64,
    pub value: String,
    pub base: u32,
}

impl Share {
    pub fn new(label: u64, value: impl Into<String>, base: u32) -> Result<Self> {
        if label == 0 {
            return Err(RecoveryError::InvalidLabel(label.to_string()));
        }

        Ok(Share {
            label,
            value: value.into(),
            base,
        })
    }

    /// Decode the value literal into an interpolation point.
    pub fn decode(&self) -> Result<Point> {
        let y = decode(&self.value, self.base)?;
        Ok(Point::new(self.label, BigInt::from(y)))
    }
}

/// Decode every share, failing on the first invalid base or digit.
pub fn decode_all(shares: &[Share]) -> Result<Vec<Point>> {
    shares.iter().map(Share::decode).collect()
}
