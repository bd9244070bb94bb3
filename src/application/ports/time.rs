// src/application/ports/time.rs
use chrono::{DateTime, Local};

/// Wall clock used to pick the dated output directory.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}
