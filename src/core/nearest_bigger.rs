//! Nearest bigger number made of the same decimal digits.

use crate::core::quicksort::sort_by_asc;
use crate::domain::model::Digits;
use crate::utils::error::Result;

impl Digits {
    /// Rearranges the digits into the next greater permutation.
    ///
    /// Returns `false` and leaves the digits untouched when they are already in
    /// non-increasing order.
    pub fn advance(&mut self) -> bool {
        let digits = self.as_mut_slice();
        let Some(threshold) = (1..digits.len()).rev().find(|&i| digits[i - 1] < digits[i]) else {
            return false;
        };

        let swappable = digits[threshold - 1];
        // 取右側大於 swappable 的最小數字，相同時取最左邊
        let mut min = threshold;
        for j in threshold..digits.len() {
            if swappable < digits[j] && digits[j] < digits[min] {
                min = j;
            }
        }

        digits.swap(threshold - 1, min);
        sort_by_asc(&mut digits[threshold..]);
        true
    }
}

/// Returns the smallest number greater than `number` built from the same
/// digits, or `number` itself when no such number exists.
///
/// ```
/// use permsort::nearest_bigger;
///
/// assert_eq!(nearest_bigger(90822).unwrap(), 92028);
/// assert_eq!(nearest_bigger(321).unwrap(), 321);
/// ```
pub fn nearest_bigger(number: u64) -> Result<u64> {
    let mut digits = Digits::from_number(number);
    if !digits.advance() {
        tracing::trace!(number, "digits already non-increasing");
        return Ok(number);
    }
    digits.to_number()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::PermsortError;

    #[test]
    fn test_documented_examples() {
        let cases = [
            (12345, 12354),
            (123450, 123504),
            (12344, 12434),
            (123440, 124034),
            (1203450, 1203504),
            (90822, 92028),
            (321321, 322113),
        ];
        for (input, expected) in cases {
            assert_eq!(nearest_bigger(input).unwrap(), expected, "input {}", input);
        }
    }

    #[test]
    fn test_fixed_points() {
        assert_eq!(nearest_bigger(321).unwrap(), 321);
        assert_eq!(nearest_bigger(5).unwrap(), 5);
        assert_eq!(nearest_bigger(0).unwrap(), 0);
        assert_eq!(nearest_bigger(1111).unwrap(), 1111);
        assert_eq!(nearest_bigger(9876543210).unwrap(), 9876543210);
    }

    #[test]
    fn test_zero_never_moves_to_front() {
        assert_eq!(nearest_bigger(10).unwrap(), 10);
        assert_eq!(nearest_bigger(102).unwrap(), 120);
        assert_eq!(nearest_bigger(1020).unwrap(), 1200);
    }

    #[test]
    fn test_advance_reports_progress() {
        let mut digits = Digits::from_number(132);
        assert!(digits.advance());
        assert_eq!(digits.as_slice(), &[2, 1, 3]);

        let mut digits = Digits::from_number(331);
        assert!(!digits.advance());
        assert_eq!(digits.as_slice(), &[3, 3, 1]);
    }

    #[test]
    fn test_near_u64_max() {
        assert_eq!(
            nearest_bigger(18446744073709551416).unwrap(),
            18446744073709551461
        );
        assert!(matches!(
            nearest_bigger(u64::MAX),
            Err(PermsortError::DigitOverflowError { .. })
        ));
    }
}
