pub mod engine;
pub mod matrix;
pub mod nearest_bigger;
pub mod numeric;
pub mod quicksort;
pub mod text;

pub use crate::domain::model::{Digits, OutputFormat, PivotStrategy, TaskOutput, TaskRequest};
pub use crate::domain::ports::{ConfigProvider, PivotSelector};
pub use crate::utils::error::Result;
