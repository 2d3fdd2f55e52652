use crate::domain::model::{Position, TaskRequest};
use clap::Subcommand;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Sort numbers ascending (quicksort)
    Sort {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,

        /// First index of the range to sort
        #[arg(long)]
        left: Option<usize>,

        /// Last index (inclusive) of the range to sort
        #[arg(long)]
        right: Option<usize>,
    },
    /// Nearest bigger number made of the same digits
    NearestBigger { number: u64 },
    IsPositive {
        #[arg(allow_negative_numbers = true)]
        number: f64,
    },
    Max {
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
    },
    /// Can the queen capture the king in one move (positions as x,y)
    QueenCapture {
        #[arg(long, value_parser = parse_position)]
        queen: Position,

        #[arg(long, value_parser = parse_position)]
        king: Position,
    },
    Isosceles {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(allow_negative_numbers = true)]
        c: f64,
    },
    /// Roman numeral for 1..=39
    Roman { number: u32 },
    /// Spell out the digits of a number
    Words {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    Palindrome { text: String },
    IndexOf { text: String, letter: char },
    ContainsDigit { number: u64, digit: u8 },
    BalanceIndex {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Clockwise spiral matrix of the given size
    Spiral { size: usize },
    /// Rotate a square matrix clockwise (rows separated by ';', cells by ',')
    Rotate {
        #[arg(allow_hyphen_values = true, value_parser = parse_matrix)]
        matrix: Matrix,
    },
    /// Move odd-index characters to the end, repeatedly
    Shuffle { text: String, iterations: u64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix(pub Vec<Vec<i64>>);

pub fn parse_position(s: &str) -> Result<Position, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{}'", s))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<i32>()
            .map_err(|e| format!("invalid coordinate '{}': {}", v, e))
    };
    Ok(Position {
        x: parse(x)?,
        y: parse(y)?,
    })
}

pub fn parse_matrix(s: &str) -> Result<Matrix, String> {
    let rows = s
        .split(';')
        .filter(|row| !row.trim().is_empty())
        .map(|row| {
            row.split(',')
                .map(|cell| {
                    cell.trim()
                        .parse::<i64>()
                        .map_err(|e| format!("invalid cell '{}': {}", cell, e))
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Matrix(rows))
}

impl From<Command> for TaskRequest {
    fn from(command: Command) -> Self {
        match command {
            Command::Sort {
                values,
                left,
                right,
            } => TaskRequest::Sort {
                values,
                left,
                right,
            },
            Command::NearestBigger { number } => TaskRequest::NearestBigger { number },
            Command::IsPositive { number } => TaskRequest::IsPositive { number },
            Command::Max { values } => TaskRequest::Max { values },
            Command::QueenCapture { queen, king } => TaskRequest::QueenCapture { queen, king },
            Command::Isosceles { a, b, c } => TaskRequest::Isosceles { a, b, c },
            Command::Roman { number } => TaskRequest::Roman { number },
            Command::Words { text } => TaskRequest::Words { text },
            Command::Palindrome { text } => TaskRequest::Palindrome { text },
            Command::IndexOf { text, letter } => TaskRequest::IndexOf { text, letter },
            Command::ContainsDigit { number, digit } => {
                TaskRequest::ContainsDigit { number, digit }
            }
            Command::BalanceIndex { values } => TaskRequest::BalanceIndex { values },
            Command::Spiral { size } => TaskRequest::Spiral { size },
            Command::Rotate { matrix } => TaskRequest::Rotate { matrix: matrix.0 },
            Command::Shuffle { text, iterations } => TaskRequest::Shuffle { text, iterations },
        }
    }
}
