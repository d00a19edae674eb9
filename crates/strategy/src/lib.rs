// In crates/strategy/src/lib.rs

pub mod engine;
pub mod sma;
pub mod types;

// Re-export public types
pub use engine::CrossoverEngine;
pub use types::{AnnotatedPoint, AnnotatedSeries, CrossoverSettings};
