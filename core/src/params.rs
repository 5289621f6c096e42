use tracing::warn;

/// Fewest points a recovery session accepts.
pub const MIN_POINTS: usize = 2;

/// Smallest subset size the search starts from.
pub const MIN_THRESHOLD: usize = 1;

/// Recovery parameters declared alongside a set of shares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecoveryParams {
    /// Declared threshold `k`.
    pub threshold: usize,
    /// Declared share count `n`, when the source states one.
    pub declared_shares: Option<usize>,
}

impl RecoveryParams {
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold,
            declared_shares: None,
        }
    }

    pub fn with_declared_shares(mut self, shares: usize) -> Self {
        self.declared_shares = Some(shares);
        self
    }

    /// Threshold actually used for `available` points.
    pub fn effective_threshold(&self, available: usize) -> usize {
        effective_threshold(self.threshold, available)
    }
}

/// Clamp a declared threshold into `MIN_THRESHOLD..=available`.
pub fn effective_threshold(threshold: usize, available: usize) -> usize {
    let clamped = threshold.min(available).max(MIN_THRESHOLD);
    if clamped != threshold {
        warn!(
            declared = threshold,
            effective = clamped,
            available,
            "threshold clamped to the available points"
        );
    }
    clamped
}
