// Domain layer: models and ports shared by the algorithms, the engine and the CLI.

pub mod model;
pub mod ports;
