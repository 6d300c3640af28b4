mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from filterdeck for tests
pub use filterdeck::{FilterError, FilterParams, Pipeline, Render, Upload};
