use crate::core::quicksort::QuickSorter;
use crate::core::{matrix, nearest_bigger, numeric, text};
use crate::domain::model::{OutputFormat, TaskOutput, TaskRequest};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::validate_digit;

pub struct Engine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> Engine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn run(&self, request: &TaskRequest) -> Result<TaskOutput> {
        tracing::debug!("Running task: {}", request.name());

        let output = match request {
            TaskRequest::Sort {
                values,
                left,
                right,
            } => {
                let mut values = values.clone();
                let sorter = QuickSorter::new(self.config.pivot_strategy());
                let left = left.unwrap_or(0);
                let right = right.unwrap_or_else(|| values.len().saturating_sub(1));
                tracing::debug!(
                    "Sorting {} values in [{}, {}] with {:?} pivot",
                    values.len(),
                    left,
                    right,
                    self.config.pivot_strategy()
                );
                sorter.sort_range(&mut values, left, right)?;
                TaskOutput::Numbers(values)
            }
            TaskRequest::NearestBigger { number } => {
                TaskOutput::Number(nearest_bigger::nearest_bigger(*number)?)
            }
            TaskRequest::IsPositive { number } => TaskOutput::Flag(numeric::is_positive(*number)),
            TaskRequest::Max { values } => TaskOutput::MaybeNumber(numeric::max_of(values)),
            TaskRequest::QueenCapture { queen, king } => {
                TaskOutput::Flag(numeric::can_queen_capture_king(*queen, *king))
            }
            TaskRequest::Isosceles { a, b, c } => {
                TaskOutput::Flag(numeric::is_isosceles_triangle(*a, *b, *c))
            }
            TaskRequest::Roman { number } => TaskOutput::Text(text::to_roman(*number)?),
            TaskRequest::Words { text: input } => TaskOutput::Text(text::number_to_words(input)),
            TaskRequest::Palindrome { text: input } => {
                TaskOutput::Flag(text::is_palindrome(input))
            }
            TaskRequest::IndexOf {
                text: input,
                letter,
            } => TaskOutput::Index(text::index_of(input, *letter)),
            TaskRequest::ContainsDigit { number, digit } => {
                validate_digit("digit", *digit)?;
                TaskOutput::Flag(numeric::contains_digit(*number, *digit))
            }
            TaskRequest::BalanceIndex { values } => {
                TaskOutput::Index(numeric::balance_index(values))
            }
            TaskRequest::Spiral { size } => {
                let grid = matrix::spiral_matrix(*size)
                    .into_iter()
                    .map(|row| row.into_iter().map(|v| v as i64).collect())
                    .collect();
                TaskOutput::Grid(grid)
            }
            TaskRequest::Rotate { matrix: grid } => {
                let mut grid = grid.clone();
                matrix::rotate_clockwise(&mut grid)?;
                TaskOutput::Grid(grid)
            }
            TaskRequest::Shuffle {
                text: input,
                iterations,
            } => TaskOutput::Text(text::shuffle_chars(input, *iterations)),
        };

        tracing::info!("Task {} completed", request.name());
        Ok(output)
    }

    /// 依配置的輸出格式產生文字
    pub fn render(&self, output: &TaskOutput) -> Result<String> {
        match self.config.output_format() {
            OutputFormat::Text => Ok(output.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string(output)?),
        }
    }
}
