// tests/support/mocks/mod.rs
pub mod scripts;
pub mod time;

pub use scripts::{FailingScriptWriter, RecordingScriptWriter};
pub use time::{FixedClock, fixed_now};
