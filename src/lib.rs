pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::Settings;
pub use self::core::{
    engine::Engine,
    nearest_bigger::nearest_bigger,
    quicksort::{sort_by_asc, sort_range, QuickSorter},
};
pub use domain::model::{Digits, OutputFormat, PivotStrategy, TaskOutput, TaskRequest};
pub use utils::error::{PermsortError, Result};
