use num_bigint::BigUint;
use num_traits::One;

use crate::error::{MathError, Result};

/// Number of size-`m` subsets of `n` items.
pub fn binomial(n: usize, m: usize) -> BigUint {
    if m > n {
        return BigUint::default();
    }
    let m = m.min(n - m);
    (0..m).fold(BigUint::one(), |acc, i| acc * (n - i) / (i + 1))
}

/// Lazy enumeration of all size-`m` subsets of a slice.
///
/// Subsets are yielded in lexicographic order of their index tuples, each
/// preserving the relative order of the source slice:
/// `{0,1}, {0,2}, {0,3}, {1,2}, {1,3}, {2,3}` for four items taken two at a
/// time.
#[derive(Clone, Debug)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl<'a, T> Combinations<'a, T> {
    pub fn new(items: &'a [T], size: usize) -> Result<Self> {
        if size < 1 || size > items.len() {
            return Err(MathError::InvalidSubsetSize {
                size,
                available: items.len(),
            });
        }

        Ok(Self {
            items,
            indices: (0..size).collect(),
            started: false,
            exhausted: false,
        })
    }

    /// Subset size being enumerated.
    pub fn size(&self) -> usize {
        self.indices.len()
    }

    /// Advance `indices` to the next tuple; false once the last one was seen.
    fn advance(&mut self) -> bool {
        let n = self.items.len();
        let m = self.indices.len();

        // Rightmost slot that can still move right.
        let Some(slot) = (0..m).rev().find(|&i| self.indices[i] < n - m + i)
        else {
            return false;
        };

        self.indices[slot] += 1;
        for i in slot + 1..m {
            self.indices[i] = self.indices[i - 1] + 1;
        }
        true
    }
}

impl<'a, T> Iterator for Combinations<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if self.started {
            if !self.advance() {
                self.exhausted = true;
                return None;
            }
        } else {
            self.started = true;
        }

        Some(self.indices.iter().map(|&i| &self.items[i]).collect())
    }
}

/// Enumerate every size-`size` subset of `items`.
pub fn combinations<T>(items: &[T], size: usize) -> Result<Combinations<'_, T>> {
    Combinations::new(items, size)
}
