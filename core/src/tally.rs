use std::collections::HashMap;

use num_bigint::BigInt;

/// Votes per candidate secret, keyed by its canonical decimal string.
///
/// Iteration follows first insertion, which also decides ties in
/// [`SecretTally::winner`].
#[derive(Clone, Debug, Default)]
pub struct SecretTally {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl SecretTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one vote for `secret`, returning its new count.
    pub fn record(&mut self, secret: &BigInt) -> usize {
        let key = secret.to_string();
        match self.index.get(&key) {
            Some(&slot) => {
                self.entries[slot].1 += 1;
                self.entries[slot].1
            }
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
                1
            }
        }
    }

    pub fn count(&self, secret: &BigInt) -> usize {
        self.index
            .get(&secret.to_string())
            .map_or(0, |&slot| self.entries[slot].1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct candidates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Total votes cast.
    pub fn votes(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(secret, count)| (secret.as_str(), *count))
    }

    /// Candidate with the most votes; the earliest inserted wins a tie.
    pub fn winner(&self) -> Option<(&str, usize)> {
        self.iter().fold(None, |best, (secret, count)| match best {
            Some((_, top)) if top >= count => best,
            _ => Some((secret, count)),
        })
    }
}
