//! Majority-vote reconstruction across share subsets.
//!
//! Starting at the (clamped) threshold, every subset of the current size is
//! interpolated at zero and the resulting secrets are tallied. The search
//! stops after the first size that produced any integral result, even a
//! single vote, and the most frequent candidate wins.
//!
//! Work at size `s` is `C(n, s)` interpolations. When no subset agrees at
//! small sizes the search keeps growing, so the worst case is exponential in
//! the number of points. Callers needing a bound must limit the points they
//! pass in.

use std::str::FromStr;

use num_bigint::BigInt;
use recovery_math::prelude::*;
use tracing::{debug, trace};

use crate::error::{RecoveryError, Result};
use crate::params::{effective_threshold, MIN_POINTS};
use crate::tally::SecretTally;

/// Outcome of a recovery together with how it was reached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recovery {
    pub secret: BigInt,
    /// Subset size at which the search stopped.
    pub subset_size: usize,
    /// Subsets that interpolated to the winning secret.
    pub votes: usize,
    /// Subsets interpolated across all sizes explored.
    pub subsets_tried: usize,
    /// Subsets skipped for non-integral Lagrange coefficients.
    pub subsets_discarded: usize,
    /// Distinct secrets seen at the final size.
    pub candidates: usize,
}

/// Recover the secret shared among `points` with declared threshold `k`.
pub fn recover<P: PointSource>(points: &[P], threshold: usize) -> Result<BigInt> {
    recover_with_report(points, threshold).map(|recovery| recovery.secret)
}

/// Like [`recover`], also reporting the search statistics.
pub fn recover_with_report<P: PointSource>(
    points: &[P],
    threshold: usize,
) -> Result<Recovery> {
    let available = points.len();
    if available < MIN_POINTS {
        return Err(RecoveryError::InsufficientPoints {
            required: MIN_POINTS,
            available,
        });
    }

    let start = effective_threshold(threshold, available);
    let mut subsets_tried = 0;
    let mut subsets_discarded = 0;

    for size in start..=available {
        debug!(
            size,
            subsets = %binomial(available, size),
            "interpolating subsets"
        );

        let mut tally = SecretTally::new();
        for subset in combinations(points, size)? {
            subsets_tried += 1;
            match interpolate_at_zero(&subset) {
                Ok(secret) => {
                    tally.record(&secret);
                }
                Err(err) if err.is_subset_local() => {
                    subsets_discarded += 1;
                    trace!(
                        labels = ?subset.iter().map(|p| p.x()).collect::<Vec<_>>(),
                        %err,
                        "subset discarded"
                    );
                }
                Err(err) => return Err(err.into()),
            }
        }

        if let Some((secret, votes)) = tally.winner() {
            debug!(
                size,
                votes,
                candidates = tally.len(),
                "consensus reached"
            );
            // Keys are rendered from `BigInt`, so they always parse back.
            let secret = BigInt::from_str(secret).map_err(|_| {
                RecoveryError::NoConsensus {
                    points: available,
                    threshold,
                }
            })?;

            return Ok(Recovery {
                secret,
                subset_size: size,
                votes,
                subsets_tried,
                subsets_discarded,
                candidates: tally.len(),
            });
        }
    }

    Err(RecoveryError::NoConsensus {
        points: available,
        threshold,
    })
}
