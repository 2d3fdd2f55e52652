use crate::domain::model::PivotStrategy;
use crate::domain::ports::PivotSelector;
use crate::utils::error::{PermsortError, Result};

/// Classic Lomuto choice: the last element of the range.
#[derive(Debug, Clone, Copy, Default)]
pub struct LastElement;

impl PivotSelector for LastElement {
    fn select<T: PartialOrd>(&self, slice: &[T]) -> usize {
        slice.len() - 1
    }
}

/// Median of the first, middle and last elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct MedianOfThree;

impl PivotSelector for MedianOfThree {
    fn select<T: PartialOrd>(&self, slice: &[T]) -> usize {
        let (a, b, c) = (0, slice.len() / 2, slice.len() - 1);
        let (x, y, z) = (&slice[a], &slice[b], &slice[c]);
        if (x <= y) == (y <= z) {
            b
        } else if (y <= x) == (x <= z) {
            a
        } else {
            c
        }
    }
}

impl PivotSelector for PivotStrategy {
    fn select<T: PartialOrd>(&self, slice: &[T]) -> usize {
        match self {
            PivotStrategy::Last => LastElement.select(slice),
            PivotStrategy::MedianOfThree => MedianOfThree.select(slice),
        }
    }
}

/// In-place quicksort with Lomuto partitioning.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSorter<P: PivotSelector = LastElement> {
    pivot: P,
}

impl<P: PivotSelector> QuickSorter<P> {
    pub fn new(pivot: P) -> Self {
        Self { pivot }
    }

    pub fn sort<'a, T: PartialOrd>(&self, seq: &'a mut [T]) -> &'a mut [T] {
        self.sort_slice(&mut *seq);
        seq
    }

    /// Sorts the inclusive range `[left, right]`; `left >= right` is a no-op.
    pub fn sort_range<'a, T: PartialOrd>(
        &self,
        seq: &'a mut [T],
        left: usize,
        right: usize,
    ) -> Result<&'a mut [T]> {
        if left >= right {
            return Ok(seq);
        }
        if right >= seq.len() {
            return Err(PermsortError::RangeOutOfBoundsError {
                left,
                right,
                len: seq.len(),
            });
        }
        self.sort_slice(&mut seq[left..=right]);
        Ok(seq)
    }

    fn sort_slice<T: PartialOrd>(&self, mut slice: &mut [T]) {
        // 小的一側遞迴，大的一側迴圈，遞迴深度 O(log n)
        while slice.len() > 1 {
            let pivot = self.partition(slice);
            let (lower, rest) = std::mem::take(&mut slice).split_at_mut(pivot);
            let upper = &mut rest[1..];
            if lower.len() < upper.len() {
                self.sort_slice(lower);
                slice = upper;
            } else {
                self.sort_slice(upper);
                slice = lower;
            }
        }
    }

    /// Returns the final index of the pivot. Everything before it is strictly less.
    fn partition<T: PartialOrd>(&self, slice: &mut [T]) -> usize {
        let last = slice.len() - 1;
        let chosen = self.pivot.select(slice);
        slice.swap(chosen, last);

        let mut boundary = 0;
        for j in 0..last {
            if slice[j] < slice[last] {
                slice.swap(boundary, j);
                boundary += 1;
            }
        }
        slice.swap(boundary, last);
        boundary
    }
}

/// Sorts the whole slice ascending in place and hands it back.
pub fn sort_by_asc<T: PartialOrd>(seq: &mut [T]) -> &mut [T] {
    QuickSorter::<LastElement>::default().sort(seq)
}

pub fn sort_range<T: PartialOrd>(seq: &mut [T], left: usize, right: usize) -> Result<&mut [T]> {
    QuickSorter::<LastElement>::default().sort_range(seq, left, right)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted<T: PartialOrd>(seq: &[T]) -> bool {
        seq.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn test_documented_examples() {
        assert_eq!(sort_by_asc(&mut [2, 9, 5]), &[2, 5, 9]);
        assert_eq!(sort_by_asc(&mut [2, 9, 5, 9]), &[2, 5, 9, 9]);
        assert_eq!(sort_by_asc(&mut [-2, 9, 5, -3]), &[-3, -2, 5, 9]);
    }

    #[test]
    fn test_empty_and_singleton() {
        let mut empty: [i32; 0] = [];
        assert!(sort_by_asc(&mut empty).is_empty());
        assert_eq!(sort_by_asc(&mut [7]), &[7]);
    }

    #[test]
    fn test_floats() {
        let mut values = [0.2, -0.1, 0.0, 1e9, -7.5];
        sort_by_asc(&mut values);
        assert_eq!(values, [-7.5, -0.1, 0.0, 0.2, 1e9]);
    }

    #[test]
    fn test_sort_range_only_touches_range() {
        let mut values = [9, 8, 7, 6, 5, 4];
        sort_range(&mut values, 1, 4).unwrap();
        assert_eq!(values, [9, 5, 6, 7, 8, 4]);
    }

    #[test]
    fn test_sort_range_degenerate_is_noop() {
        let mut values = [3, 1, 2];
        sort_range(&mut values, 2, 2).unwrap();
        sort_range(&mut values, 5, 1).unwrap();
        assert_eq!(values, [3, 1, 2]);
    }

    #[test]
    fn test_sort_range_out_of_bounds() {
        let mut values = [3, 1, 2];
        let err = sort_range(&mut values, 0, 3).unwrap_err();
        assert!(matches!(
            err,
            PermsortError::RangeOutOfBoundsError { right: 3, len: 3, .. }
        ));
        assert_eq!(values, [3, 1, 2]);
    }

    #[test]
    fn test_median_of_three_selection() {
        assert_eq!(MedianOfThree.select(&[1, 5, 9]), 1);
        assert_eq!(MedianOfThree.select(&[5, 1, 9]), 0);
        assert_eq!(MedianOfThree.select(&[1, 9, 5]), 2);
        assert_eq!(MedianOfThree.select(&[4]), 0);
    }

    #[test]
    fn test_sorted_input_does_not_overflow_stack() {
        let mut ascending: Vec<u32> = (0..10_000).collect();
        sort_by_asc(&mut ascending);
        assert!(is_sorted(&ascending));

        let mut descending: Vec<u32> = (0..200_000).rev().collect();
        QuickSorter::new(MedianOfThree).sort(&mut descending);
        assert!(is_sorted(&descending));
    }

    #[test]
    fn test_all_equal() {
        let mut values = vec![4; 1000];
        sort_by_asc(&mut values);
        assert_eq!(values, vec![4; 1000]);
    }

    #[test]
    fn test_nan_does_not_panic() {
        let mut values = [3.0, f64::NAN, 1.0, 2.0];
        sort_by_asc(&mut values);
        assert_eq!(values.iter().filter(|v| v.is_nan()).count(), 1);
    }
}
