//! Weighted random selection over cumulative intervals.
//!
//! Each entry owns the half-open interval `[before, before + weight)` on an
//! axis running from 0 to the total weight. Intervals are laid end to end in
//! insertion order, so they never overlap and leave no gaps. A uniform draw
//! scaled onto the axis lands in exactly one interval, with probability equal
//! to that interval's share of the axis.
//!
//! The index is a sorted array of interval end points searched with a binary
//! search, giving O(log n) containment queries without a pointer-based tree.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use rand_core::RngCore;

use super::source::{SecureRandom, UnitFloat};
use crate::error::{Error, Result};

/// A value and its relative selection weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedEntry<T> {
    pub value: T,
    pub weight: f64,
}

impl<T> WeightedEntry<T> {
    pub fn new(value: T, weight: f64) -> Self {
        Self { value, weight }
    }
}

// =============================================================================
// Interval index
// =============================================================================

/// End points of the cumulative intervals, ascending.
#[derive(Debug, Clone)]
struct IntervalIndex {
    ends: Vec<f64>,
    /// Index of the last interval with non-zero width.
    last_live: usize,
}

impl IntervalIndex {
    fn build(weights: impl IntoIterator<Item = f64>) -> Result<(Self, f64)> {
        let mut ends = Vec::new();
        let mut total = 0.0;
        let mut last_live = None;

        for (index, weight) in weights.into_iter().enumerate() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::InvalidWeight { index, weight });
            }
            total += weight;
            ends.push(total);
            if weight > 0.0 {
                last_live = Some(index);
            }
        }

        if ends.is_empty() {
            return Err(Error::NoEntries);
        }
        let Some(last_live) = last_live else {
            return Err(Error::ZeroTotalWeight);
        };

        Ok((Self { ends, last_live }, total))
    }

    /// Index of the interval containing `x`.
    ///
    /// Zero-width intervals are skipped: their end equals their start, so any
    /// `x` at or beyond it moves past them. A point at or past the final end,
    /// which a `[0, 1)` draw can only reach through rounding, resolves to the
    /// last interval that can be selected.
    #[inline]
    fn containing(&self, x: f64) -> usize {
        let idx = self.ends.partition_point(|&end| end <= x);
        if idx > self.last_live {
            self.last_live
        } else {
            idx
        }
    }
}

// =============================================================================
// Weighted random set
// =============================================================================

/// Samples values with probability proportional to their weights.
///
/// The set owns its random source. It is immutable once built apart from the
/// entropy consumed by [`next`](Self::next). Several entries may share a
/// value; their weights then add up. An entry with weight 0 is kept but can
/// never be selected.
#[derive(Debug, Clone)]
pub struct WeightedRandomSet<T, R = SecureRandom> {
    index: IntervalIndex,
    values: Vec<T>,
    total_weight: f64,
    source: R,
}

impl<T: Clone> WeightedRandomSet<T, SecureRandom> {
    /// Builds a set drawing from the operating system's secure source.
    pub fn new(entries: impl IntoIterator<Item = WeightedEntry<T>>) -> Result<Self> {
        Self::with_source(entries, SecureRandom)
    }
}

impl<T: Clone, R: RngCore> WeightedRandomSet<T, R> {
    /// Builds a set drawing from `source`.
    ///
    /// Fails if there are no entries, if any weight is negative or not
    /// finite, or if the weights sum to zero.
    pub fn with_source(
        entries: impl IntoIterator<Item = WeightedEntry<T>>,
        source: R,
    ) -> Result<Self> {
        let (index, values, total_weight) = Self::index_entries(entries)?;
        Ok(Self {
            index,
            values,
            total_weight,
            source,
        })
    }

    /// Replaces the entries while keeping the random source.
    ///
    /// On error the set is left unchanged.
    pub fn reweight(&mut self, entries: impl IntoIterator<Item = WeightedEntry<T>>) -> Result<()> {
        let (index, values, total_weight) = Self::index_entries(entries)?;
        self.index = index;
        self.values = values;
        self.total_weight = total_weight;
        Ok(())
    }

    fn index_entries(
        entries: impl IntoIterator<Item = WeightedEntry<T>>,
    ) -> Result<(IntervalIndex, Vec<T>, f64)> {
        let (values, weights): (Vec<T>, Vec<f64>) =
            entries.into_iter().map(|e| (e.value, e.weight)).unzip();
        let (index, total_weight) = IntervalIndex::build(weights)?;
        Ok((index, values, total_weight))
    }

    /// Draws the next value.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> T {
        let x = self.source.next_f64() * self.total_weight;
        self.values[self.index.containing(x)].clone()
    }

    /// Sum of all entry weights.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Number of entries, including zero-weight ones.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Access to the underlying random source.
    pub fn source_mut(&mut self) -> &mut R {
        &mut self.source
    }
}

impl<T: Clone + Eq + Hash, R: RngCore> WeightedRandomSet<T, R> {
    /// Probability that a single draw returns `value`.
    pub fn probability(&self, value: &T) -> f64 {
        self.mass().get(value).copied().unwrap_or(0.0) / self.total_weight
    }

    /// Shannon entropy of one draw, in bits.
    pub fn entropy_bits(&self) -> f64 {
        self.mass()
            .values()
            .map(|&w| w / self.total_weight)
            .filter(|&p| p > 0.0)
            .map(|p| -p * p.log2())
            .sum()
    }

    /// Distinct values a draw can return.
    pub fn support(&self) -> HashSet<&T> {
        self.mass()
            .into_iter()
            .filter(|&(_, w)| w > 0.0)
            .map(|(value, _)| value)
            .collect()
    }

    /// Weight per distinct value.
    fn mass(&self) -> HashMap<&T, f64> {
        let mut mass = HashMap::new();
        let mut start = 0.0;
        for (value, &end) in self.values.iter().zip(&self.index.ends) {
            *mass.entry(value).or_insert(0.0) += end - start;
            start = end;
        }
        mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Replays one fixed value forever.
    struct Fixed(u64);

    impl RngCore for Fixed {
        fn next_u32(&mut self) -> u32 {
            self.0 as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(self.0 as u8);
        }
    }

    fn entries(weights: &[f64]) -> Vec<WeightedEntry<usize>> {
        weights
            .iter()
            .enumerate()
            .map(|(i, &w)| WeightedEntry::new(i, w))
            .collect()
    }

    fn frequencies<R: RngCore>(set: &mut WeightedRandomSet<usize, R>, samples: usize) -> Vec<f64> {
        let mut counts = vec![0.0; set.len()];
        for _ in 0..samples {
            counts[set.next()] += 1.0;
        }
        counts.iter().map(|c| c / samples as f64).collect()
    }

    #[test]
    fn test_index_boundaries() {
        let (index, total) = IntervalIndex::build([1.0, 2.0, 3.0]).unwrap();
        assert_eq!(total, 6.0);
        assert_eq!(index.containing(0.0), 0);
        assert_eq!(index.containing(0.999), 0);
        assert_eq!(index.containing(1.0), 1);
        assert_eq!(index.containing(2.999), 1);
        assert_eq!(index.containing(3.0), 2);
        assert_eq!(index.containing(5.999), 2);
    }

    #[test]
    fn test_index_skips_zero_width() {
        let (index, _) = IntervalIndex::build([1.0, 0.0, 0.0, 1.0, 0.0]).unwrap();
        assert_eq!(index.containing(0.5), 0);
        assert_eq!(index.containing(1.0), 3);
        assert_eq!(index.containing(1.5), 3);
        // Past the end resolves to the last selectable interval, not the
        // trailing zero-width one.
        assert_eq!(index.containing(2.0), 3);
    }

    #[test]
    fn test_rejects_empty() {
        let result = WeightedRandomSet::<char>::new(Vec::new());
        assert_eq!(result.unwrap_err(), Error::NoEntries);
    }

    #[test]
    fn test_rejects_zero_total() {
        let result = WeightedRandomSet::new(entries(&[0.0, 0.0]));
        assert_eq!(result.unwrap_err(), Error::ZeroTotalWeight);
    }

    #[test]
    fn test_rejects_negative_weight() {
        let result = WeightedRandomSet::new(entries(&[1.0, -0.5]));
        assert_eq!(
            result.unwrap_err(),
            Error::InvalidWeight {
                index: 1,
                weight: -0.5
            }
        );
    }

    #[test]
    fn test_rejects_nan_weight() {
        let result = WeightedRandomSet::new(entries(&[f64::NAN]));
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidWeight { index: 0, .. }
        ));
    }

    #[test]
    fn test_rejects_infinite_weight() {
        let result = WeightedRandomSet::new(entries(&[1.0, f64::INFINITY]));
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidWeight { index: 1, .. }
        ));
    }

    #[test]
    fn test_top_of_range_selects_last() {
        let mut set = WeightedRandomSet::with_source(entries(&[1.0, 1.0, 1.0]), Fixed(u64::MAX))
            .unwrap();
        assert_eq!(set.next(), 2);
    }

    #[test]
    fn test_bottom_of_range_selects_first() {
        let mut set = WeightedRandomSet::with_source(entries(&[1.0, 1.0, 1.0]), Fixed(0)).unwrap();
        assert_eq!(set.next(), 0);
    }

    #[test]
    fn test_zero_weight_never_selected() {
        let rng = StdRng::seed_from_u64(7);
        let mut set = WeightedRandomSet::with_source(entries(&[1.0, 0.0, 1.0, 0.0]), rng).unwrap();
        let freq = frequencies(&mut set, 5_000);
        assert_eq!(freq[1], 0.0);
        assert_eq!(freq[3], 0.0);
    }

    #[test]
    fn test_triangle_distribution() {
        let weights = [1.0, 2.0, 3.0, 4.0, 5.0, 4.0, 3.0, 2.0, 1.0];
        let expected = [0.04, 0.08, 0.12, 0.16, 0.2, 0.16, 0.12, 0.08, 0.04];

        let mut set =
            WeightedRandomSet::with_source(entries(&weights), StdRng::seed_from_u64(42)).unwrap();
        let freq = frequencies(&mut set, 10_000);

        for (value, (&e, &a)) in expected.iter().zip(&freq).enumerate() {
            assert!((e - a).abs() < 0.02, "value {value}: expected {e}, got {a}");
        }
    }

    #[test]
    fn test_insertion_order_irrelevant() {
        let forward = entries(&[5.0, 1.0, 4.0]);
        let mut reversed = forward.clone();
        reversed.reverse();

        let mut a = WeightedRandomSet::with_source(forward, StdRng::seed_from_u64(1)).unwrap();
        let mut b = WeightedRandomSet::with_source(reversed, StdRng::seed_from_u64(2)).unwrap();

        let fa = frequencies(&mut a, 20_000);
        let fb = frequencies(&mut b, 20_000);
        for i in 0..3 {
            assert!((fa[i] - fb[i]).abs() < 0.02);
        }
    }

    #[test]
    fn test_shared_values_accumulate() {
        let set = WeightedRandomSet::new(vec![
            WeightedEntry::new('a', 1.0),
            WeightedEntry::new('b', 2.0),
            WeightedEntry::new('a', 1.0),
        ])
        .unwrap();
        assert_eq!(set.total_weight(), 4.0);
        assert_eq!(set.probability(&'a'), 0.5);
        assert_eq!(set.probability(&'b'), 0.5);
        assert_eq!(set.probability(&'z'), 0.0);
    }

    #[test]
    fn test_entropy_bits_uniform() {
        let set = WeightedRandomSet::new(entries(&[1.0; 8])).unwrap();
        assert!((set.entropy_bits() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_bits_single_value() {
        let set = WeightedRandomSet::new(entries(&[2.0, 0.0])).unwrap();
        assert_eq!(set.entropy_bits(), 0.0);
    }

    #[test]
    fn test_support_skips_zero_weight() {
        let set = WeightedRandomSet::new(vec![
            WeightedEntry::new('a', 1.0),
            WeightedEntry::new('b', 0.0),
            WeightedEntry::new('a', 2.0),
            WeightedEntry::new('c', 0.5),
        ])
        .unwrap();

        let support = set.support();
        assert_eq!(support.len(), 2);
        assert!(support.contains(&'a'));
        assert!(support.contains(&'c'));
        assert!(!support.contains(&'b'));
    }

    #[test]
    fn test_reweight_keeps_set_on_error() {
        let mut set = WeightedRandomSet::new(entries(&[1.0, 1.0])).unwrap();
        assert!(set.reweight(entries(&[0.0])).is_err());
        assert_eq!(set.len(), 2);
        assert_eq!(set.total_weight(), 2.0);

        set.reweight(entries(&[3.0])).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.next(), 0);
    }
}
