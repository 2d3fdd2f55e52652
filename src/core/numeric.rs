use crate::domain::model::Position;

/// Zero counts as positive.
pub fn is_positive(number: f64) -> bool {
    number >= 0.0
}

pub fn max_of<T: PartialOrd + Copy>(values: &[T]) -> Option<T> {
    let (&first, rest) = values.split_first()?;
    Some(
        rest.iter()
            .fold(first, |max, &v| if max < v { v } else { max }),
    )
}

/// Whether a queen can take the king in one move: same rank, file or diagonal.
pub fn can_queen_capture_king(queen: Position, king: Position) -> bool {
    queen.x == king.x
        || queen.y == king.y
        || (queen.x - king.x).abs() == (queen.y - king.y).abs()
}

pub fn is_isosceles_triangle(a: f64, b: f64, c: f64) -> bool {
    if a <= 0.0 || b <= 0.0 || c <= 0.0 {
        return false;
    }
    (a == b && a + b > c) || (a == c && a + c > b) || (b == c && b + c > a)
}

pub fn contains_digit(number: u64, digit: u8) -> bool {
    let digit = u64::from(digit);
    let mut rest = number;
    loop {
        if rest % 10 == digit {
            return true;
        }
        rest /= 10;
        if rest == 0 {
            return false;
        }
    }
}

/// First interior index whose left and right sums are equal.
pub fn balance_index(values: &[i64]) -> Option<usize> {
    if values.len() < 3 {
        return None;
    }
    let total: i128 = values.iter().map(|&v| i128::from(v)).sum();
    let mut left: i128 = i128::from(values[0]);
    for (i, &v) in values.iter().enumerate().take(values.len() - 1).skip(1) {
        let right = total - left - i128::from(v);
        if left == right {
            return Some(i);
        }
        left += i128::from(v);
    }
    None
}
