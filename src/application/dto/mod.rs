pub mod generation;

pub use generation::{GenerationReport, WriteFailure};
