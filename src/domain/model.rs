use crate::utils::error::{PermsortError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decimal digits of a non-negative integer, most significant first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digits(Vec<u8>);

impl Digits {
    pub fn from_number(number: u64) -> Self {
        let mut digits = Vec::new();
        let mut rest = number;
        loop {
            digits.push((rest % 10) as u8);
            rest /= 10;
            if rest == 0 {
                break;
            }
        }
        digits.reverse();
        Self(digits)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Splits into the untouched prefix and the suffix starting at `mid`.
    pub fn split_at(&self, mid: usize) -> (&[u8], &[u8]) {
        self.0.split_at(mid)
    }

    /// Folds the digits back into an integer (`acc * 10 + d`).
    pub fn to_number(&self) -> Result<u64> {
        self.0
            .iter()
            .try_fold(0u64, |acc, &d| acc.checked_mul(10)?.checked_add(u64::from(d)))
            .ok_or_else(|| PermsortError::DigitOverflowError {
                digits: self.to_string(),
            })
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0 {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PivotStrategy {
    #[default]
    Last,
    MedianOfThree,
}

impl PivotStrategy {
    pub const NAMES: [&'static str; 2] = ["last", "median-of-three"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["text", "json"];
}

/// Chessboard square, 1-based on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// A single routine invocation with its already-parsed arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "task", rename_all = "kebab-case")]
pub enum TaskRequest {
    Sort {
        values: Vec<f64>,
        left: Option<usize>,
        right: Option<usize>,
    },
    NearestBigger {
        number: u64,
    },
    IsPositive {
        number: f64,
    },
    Max {
        values: Vec<f64>,
    },
    QueenCapture {
        queen: Position,
        king: Position,
    },
    Isosceles {
        a: f64,
        b: f64,
        c: f64,
    },
    Roman {
        number: u32,
    },
    Words {
        text: String,
    },
    Palindrome {
        text: String,
    },
    IndexOf {
        text: String,
        letter: char,
    },
    ContainsDigit {
        number: u64,
        digit: u8,
    },
    BalanceIndex {
        values: Vec<i64>,
    },
    Spiral {
        size: usize,
    },
    Rotate {
        matrix: Vec<Vec<i64>>,
    },
    Shuffle {
        text: String,
        iterations: u64,
    },
}

impl TaskRequest {
    pub fn name(&self) -> &'static str {
        match self {
            TaskRequest::Sort { .. } => "sort",
            TaskRequest::NearestBigger { .. } => "nearest-bigger",
            TaskRequest::IsPositive { .. } => "is-positive",
            TaskRequest::Max { .. } => "max",
            TaskRequest::QueenCapture { .. } => "queen-capture",
            TaskRequest::Isosceles { .. } => "isosceles",
            TaskRequest::Roman { .. } => "roman",
            TaskRequest::Words { .. } => "words",
            TaskRequest::Palindrome { .. } => "palindrome",
            TaskRequest::IndexOf { .. } => "index-of",
            TaskRequest::ContainsDigit { .. } => "contains-digit",
            TaskRequest::BalanceIndex { .. } => "balance-index",
            TaskRequest::Spiral { .. } => "spiral",
            TaskRequest::Rotate { .. } => "rotate",
            TaskRequest::Shuffle { .. } => "shuffle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TaskOutput {
    Numbers(Vec<f64>),
    Number(u64),
    MaybeNumber(Option<f64>),
    Index(Option<usize>),
    Flag(bool),
    Text(String),
    Grid(Vec<Vec<i64>>),
}

impl fmt::Display for TaskOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskOutput::Numbers(values) => write_row(f, values),
            TaskOutput::Number(n) => write!(f, "{}", n),
            TaskOutput::MaybeNumber(Some(n)) => write!(f, "{}", n),
            TaskOutput::Index(Some(i)) => write!(f, "{}", i),
            // 沿用 -1 表示找不到
            TaskOutput::MaybeNumber(None) | TaskOutput::Index(None) => write!(f, "-1"),
            TaskOutput::Flag(b) => write!(f, "{}", b),
            TaskOutput::Text(s) => write!(f, "{}", s),
            TaskOutput::Grid(rows) => {
                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write_row(f, row)?;
                }
                Ok(())
            }
        }
    }
}

fn write_row<T: fmt::Display>(f: &mut fmt::Formatter<'_>, row: &[T]) -> fmt::Result {
    for (i, v) in row.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", v)?;
    }
    Ok(())
}
