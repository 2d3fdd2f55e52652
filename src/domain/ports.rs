use crate::domain::model::{OutputFormat, PivotStrategy};

/// Picks the index of the partition pivot inside a non-empty slice.
pub trait PivotSelector {
    fn select<T: PartialOrd>(&self, slice: &[T]) -> usize;
}

pub trait ConfigProvider {
    fn pivot_strategy(&self) -> PivotStrategy;
    fn output_format(&self) -> OutputFormat;
}
