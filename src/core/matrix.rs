use crate::utils::error::Result;
use crate::utils::validation::validate_square;

/// `size x size` matrix filled clockwise with 1, 2, 3, ... from the top-left corner.
pub fn spiral_matrix(size: usize) -> Vec<Vec<u64>> {
    let mut m = vec![vec![0u64; size]; size];
    if size == 0 {
        return m;
    }

    let mut count = 1u64;
    let (mut top, mut left) = (0usize, 0usize);
    let (mut bottom, mut right) = (size - 1, size - 1);

    // 逐圈填入，每圈四條邊
    while top <= bottom && left <= right {
        for col in left..=right {
            m[top][col] = count;
            count += 1;
        }
        for row in top + 1..=bottom {
            m[row][right] = count;
            count += 1;
        }
        if top < bottom && left < right {
            for col in (left..right).rev() {
                m[bottom][col] = count;
                count += 1;
            }
            for row in (top + 1..bottom).rev() {
                m[row][left] = count;
                count += 1;
            }
        }
        if bottom == 0 || right == 0 {
            break;
        }
        top += 1;
        left += 1;
        bottom -= 1;
        right -= 1;
    }
    m
}

/// Rotates a square matrix 90 degrees clockwise in place.
pub fn rotate_clockwise<T>(matrix: &mut [Vec<T>]) -> Result<()> {
    validate_square("matrix", matrix)?;

    let n = matrix.len();
    for i in 0..n {
        for j in i + 1..n {
            let (upper, lower) = matrix.split_at_mut(j);
            std::mem::swap(&mut upper[i][j], &mut lower[0][i]);
        }
    }
    for row in matrix.iter_mut() {
        row.reverse();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spiral_matrix() {
        assert_eq!(
            spiral_matrix(3),
            vec![vec![1, 2, 3], vec![8, 9, 4], vec![7, 6, 5]]
        );
        assert_eq!(
            spiral_matrix(4),
            vec![
                vec![1, 2, 3, 4],
                vec![12, 13, 14, 5],
                vec![11, 16, 15, 6],
                vec![10, 9, 8, 7],
            ]
        );
    }

    #[test]
    fn test_spiral_matrix_small() {
        assert!(spiral_matrix(0).is_empty());
        assert_eq!(spiral_matrix(1), vec![vec![1]]);
        assert_eq!(spiral_matrix(2), vec![vec![1, 2], vec![4, 3]]);
    }

    #[test]
    fn test_spiral_matrix_covers_all_values() {
        let size = 7;
        let mut values: Vec<u64> = spiral_matrix(size).into_iter().flatten().collect();
        values.sort_unstable();
        assert_eq!(values, (1..=(size * size) as u64).collect::<Vec<_>>());
    }

    #[test]
    fn test_rotate_clockwise() {
        let mut m = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
        rotate_clockwise(&mut m).unwrap();
        assert_eq!(m, vec![vec![7, 4, 1], vec![8, 5, 2], vec![9, 6, 3]]);
    }

    #[test]
    fn test_rotate_four_times_is_identity() {
        let original: Vec<Vec<u64>> = spiral_matrix(5);
        let mut m = original.clone();
        for _ in 0..4 {
            rotate_clockwise(&mut m).unwrap();
        }
        assert_eq!(m, original);
    }

    #[test]
    fn test_rotate_rejects_non_square() {
        let mut m = vec![vec![1, 2, 3], vec![4, 5, 6]];
        assert!(rotate_clockwise(&mut m).is_err());
        assert_eq!(m, vec![vec![1, 2, 3], vec![4, 5, 6]]);
    }
}
