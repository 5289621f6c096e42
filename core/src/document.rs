//! JSON share documents.
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" }
//! }
//! ```
//!
//! Every entry other than `keys` is a share keyed by its label. Bases may be
//! written as strings or numbers.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use recovery_math::prelude::*;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::consensus::{recover_with_report, Recovery};
use crate::error::{RecoveryError, Result};
use crate::params::RecoveryParams;
use crate::share::{decode_all, Share};

const KEYS_ENTRY: &str = "keys";

#[derive(Debug, Deserialize)]
struct Keys {
    #[serde(default)]
    n: Option<u64>,
    k: u64,
}

/// A scalar that may be written either as a JSON string or number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Literal {
    Text(String),
    Number(u64),
}

impl Literal {
    fn into_text(self) -> String {
        match self {
            Literal::Text(text) => text,
            Literal::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawShare {
    value: Option<Literal>,
    base: Option<Literal>,
}

/// Shares and recovery parameters read from one document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareDocument {
    pub params: RecoveryParams,
    /// Shares ordered by ascending label.
    pub shares: Vec<Share>,
}

impl ShareDocument {
    pub fn from_json(text: &str) -> Result<Self> {
        let mut entries: BTreeMap<String, Value> = serde_json::from_str(text)?;

        let keys = entries
            .remove(KEYS_ENTRY)
            .ok_or(RecoveryError::MissingThreshold)?;
        let keys: Keys = serde_json::from_value(keys)
            .map_err(|_| RecoveryError::MissingThreshold)?;

        let mut seen = HashSet::with_capacity(entries.len());
        let mut shares = entries
            .into_iter()
            .map(|(label, entry)| {
                let share = parse_share(&label, entry)?;
                if !seen.insert(share.label) {
                    return Err(RecoveryError::DuplicateLabel(share.label));
                }
                Ok(share)
            })
            .collect::<Result<Vec<_>>>()?;
        shares.sort_by_key(|share| share.label);

        let mut params = RecoveryParams::new(saturating_usize(keys.k));
        if let Some(n) = keys.n {
            let declared = saturating_usize(n);
            if declared != shares.len() {
                warn!(
                    declared,
                    found = shares.len(),
                    "declared share count differs from shares present"
                );
            }
            params = params.with_declared_shares(declared);
        }

        debug!(
            threshold = params.threshold,
            shares = shares.len(),
            "parsed share document"
        );
        Ok(ShareDocument { params, shares })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text =
            fs::read_to_string(path).map_err(|err| RecoveryError::io(path, err))?;
        Self::from_json(&text)
    }

    /// Decode every share into a point.
    pub fn points(&self) -> Result<Vec<Point>> {
        decode_all(&self.shares)
    }

    /// Decode the shares and run the consensus search with `keys.k`.
    pub fn recover(&self) -> Result<Recovery> {
        let points = self.points()?;
        recover_with_report(&points, self.params.threshold)
    }
}

fn saturating_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

fn parse_label(label: &str) -> Result<u64> {
    match label.trim().parse::<u64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(RecoveryError::InvalidLabel(label.to_string())),
    }
}

fn parse_share(label: &str, entry: Value) -> Result<Share> {
    let x = parse_label(label)?;
    let malformed = |reason: &str| RecoveryError::MalformedShare {
        label: label.to_string(),
        reason: reason.to_string(),
    };

    let raw: RawShare = serde_json::from_value(entry)
        .map_err(|err| malformed(&err.to_string()))?;
    let value = raw.value.ok_or_else(|| malformed("missing `value`"))?;
    let base = raw.base.ok_or_else(|| malformed("missing `base`"))?;

    let base = parse_base(&base.into_text())?;
    Share::new(x, value.into_text(), base)
}
