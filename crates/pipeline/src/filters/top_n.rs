//! Aggregating stage ranking keys by frequency.
//!
//! Unlike the per-element filters, this stage has to see its whole input
//! before it can emit anything. It stays lazy in the sense that nothing is
//! pulled until the first ranked entry is requested; at that point the
//! entire upstream is drained.

use crate::traits::{Filter, Stream};
use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

/// Emits the `n` most frequent keys as `(key, count)` pairs.
///
/// ## Algorithm
/// 1. Drain the input, counting each element's key (elements whose key
///    function returns `None` are skipped)
/// 2. Order keys by descending count; ties keep first-seen order
/// 3. Emit at most `n` entries
pub struct TopNByCount<T, K, F> {
    n: usize,
    key: F,
    _marker: PhantomData<fn(T) -> K>,
}

impl<T, K, F> TopNByCount<T, K, F>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> Option<K> + Send + Sync,
{
    /// Create a new TopNByCount.
    ///
    /// # Arguments
    /// * `n` - Maximum number of entries to emit
    /// * `key` - Extracts the grouping key from an element
    pub fn new(n: usize, key: F) -> Self {
        Self {
            n,
            key,
            _marker: PhantomData,
        }
    }

    fn rank(&self, input: impl Iterator<Item = T>) -> Vec<(K, usize)> {
        let mut counts: HashMap<K, usize> = HashMap::new();
        let mut first_seen: Vec<K> = Vec::new();
        let mut skipped = 0usize;

        for item in input {
            match (self.key)(&item) {
                Some(key) => {
                    let count = counts.entry(key.clone()).or_insert(0);
                    if *count == 0 {
                        first_seen.push(key);
                    }
                    *count += 1;
                }
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            tracing::trace!("TopNByCount skipped {} elements without a key", skipped);
        }

        let mut ranked: Vec<(K, usize)> = first_seen
            .into_iter()
            .map(|key| {
                let count = counts.get(&key).copied().unwrap_or(0);
                (key, count)
            })
            .collect();
        // sort_by is stable, which keeps first-seen order among equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(self.n);
        ranked
    }
}

impl<T, K, F> Filter<T, (K, usize)> for TopNByCount<T, K, F>
where
    T: 'static,
    K: Eq + Hash + Clone + 'static,
    F: Fn(&T) -> Option<K> + Send + Sync,
{
    fn name(&self) -> &str {
        "TopNByCount"
    }

    fn apply<'a>(&'a self, input: Stream<'a, T>) -> Stream<'a, (K, usize)> {
        Box::new(std::iter::once_with(move || self.rank(input)).flatten())
    }
}
