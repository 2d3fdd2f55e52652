use crate::utils::error::Result;
use crate::utils::validation::validate_range;

const ROMAN_STEPS: [(u32, &str); 5] = [(10, "X"), (9, "IX"), (5, "V"), (4, "IV"), (1, "I")];

/// Roman numeral for 1..=39.
pub fn to_roman(number: u32) -> Result<String> {
    validate_range("number", number, 1, 39)?;

    let mut rest = number;
    let mut result = String::new();
    for (value, symbol) in ROMAN_STEPS {
        while rest >= value {
            result.push_str(symbol);
            rest -= value;
        }
    }
    Ok(result)
}

fn char_to_word(c: char) -> Option<&'static str> {
    let word = match c {
        '0' => "zero",
        '1' => "one",
        '2' => "two",
        '3' => "three",
        '4' => "four",
        '5' => "five",
        '6' => "six",
        '7' => "seven",
        '8' => "eight",
        '9' => "nine",
        '.' | ',' => "point",
        '-' => "minus",
        _ => return None,
    };
    Some(word)
}

/// Spells out a number written as text, e.g. `"-10,5"` becomes
/// `"minus one zero point five"`. Unknown characters are skipped.
pub fn number_to_words(text: &str) -> String {
    text.chars()
        .filter_map(char_to_word)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn is_palindrome(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    let n = chars.len();
    (0..n / 2).all(|i| chars[i] == chars[n - 1 - i])
}

/// Char index of the first occurrence of `letter`.
pub fn index_of(text: &str, letter: char) -> Option<usize> {
    text.chars().position(|c| c == letter)
}

fn shuffle_once(chars: &[char]) -> Vec<char> {
    chars
        .iter()
        .step_by(2)
        .chain(chars.iter().skip(1).step_by(2))
        .copied()
        .collect()
}

/// Moves odd-index characters to the end, `iterations` times.
///
/// The shuffle is a permutation, so it cycles back to the input after some
/// period `k`; only `iterations % k` rounds are actually run.
pub fn shuffle_chars(text: &str, iterations: u64) -> String {
    let original: Vec<char> = text.chars().collect();
    let mut current = original.clone();

    let mut round = 0;
    while round < iterations {
        current = shuffle_once(&current);
        round += 1;
        if current == original {
            let remaining = iterations % round;
            tracing::debug!(period = round, remaining, "shuffle cycle detected");
            for _ in 0..remaining {
                current = shuffle_once(&current);
            }
            break;
        }
    }

    current.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::PermsortError;

    #[test]
    fn test_to_roman() {
        assert_eq!(to_roman(1).unwrap(), "I");
        assert_eq!(to_roman(2).unwrap(), "II");
        assert_eq!(to_roman(5).unwrap(), "V");
        assert_eq!(to_roman(10).unwrap(), "X");
        assert_eq!(to_roman(26).unwrap(), "XXVI");
        assert_eq!(to_roman(39).unwrap(), "XXXIX");
        assert_eq!(to_roman(14).unwrap(), "XIV");
    }

    #[test]
    fn test_to_roman_out_of_range() {
        assert!(matches!(
            to_roman(0),
            Err(PermsortError::InvalidInputError { .. })
        ));
        assert!(to_roman(40).is_err());
    }

    #[test]
    fn test_number_to_words() {
        assert_eq!(number_to_words("1"), "one");
        assert_eq!(number_to_words("10"), "one zero");
        assert_eq!(number_to_words("-10"), "minus one zero");
        assert_eq!(number_to_words("10.5"), "one zero point five");
        assert_eq!(number_to_words("10,5"), "one zero point five");
        assert_eq!(number_to_words("1950.2"), "one nine five zero point two");
        assert_eq!(number_to_words("1e3"), "one three");
        assert_eq!(number_to_words(""), "");
    }

    #[test]
    fn test_is_palindrome() {
        assert!(is_palindrome("abcba"));
        assert!(is_palindrome("0123210"));
        assert!(!is_palindrome("qweqwe"));
        assert!(is_palindrome(""));
        assert!(is_palindrome("шалаш"));
    }

    #[test]
    fn test_index_of() {
        assert_eq!(index_of("qwerty", 'q'), Some(0));
        assert_eq!(index_of("qwerty", 't'), Some(4));
        assert_eq!(index_of("qwerty", 'Q'), None);
        assert_eq!(index_of("qwerty", 'p'), None);
        assert_eq!(index_of("ёжик", 'и'), Some(2));
    }

    #[test]
    fn test_shuffle_chars() {
        assert_eq!(shuffle_chars("012345", 1), "024135");
        assert_eq!(shuffle_chars("qwerty", 1), "qetwry");
        assert_eq!(shuffle_chars("012345", 2), "043215");
        assert_eq!(shuffle_chars("qwerty", 2), "qtrewy");
        assert_eq!(shuffle_chars("012345", 3), "031425");
        assert_eq!(shuffle_chars("qwerty", 3), "qrwtey");
        assert_eq!(shuffle_chars("qwerty", 0), "qwerty");
    }

    #[test]
    fn test_shuffle_chars_large_iteration_count() {
        // "012345" 的週期為 4
        assert_eq!(shuffle_chars("012345", 4), "012345");
        assert_eq!(shuffle_chars("012345", 4_000_000_001), "024135");
        assert_eq!(
            shuffle_chars("012345", 1_000_000_000_003),
            shuffle_chars("012345", 3)
        );
    }
}
