//! Recovery of Shamir-shared secrets from shares that may be corrupted.
//!
//! Shares are decoded from their declared base, then every subset of the
//! threshold size is interpolated at zero and the most frequent result wins.

pub mod batch;
pub mod consensus;
pub mod document;
pub mod error;
pub mod params;
pub mod share;
pub mod tally;

pub use consensus::{recover, recover_with_report, Recovery};
pub use document::ShareDocument;
pub use error::{RecoveryError, Result};
pub use params::RecoveryParams;
pub use recovery_math::{MathError, Point};
pub use share::Share;

use num_bigint::BigInt;

/// Recover the secret behind `points` for declared threshold `threshold`.
pub fn recover_secret(points: &[Point], threshold: usize) -> Result<BigInt> {
    recover(points, threshold)
}
