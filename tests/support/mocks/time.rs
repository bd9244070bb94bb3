// tests/support/mocks/time.rs
use chrono::{DateTime, Local};
use info_query_builder::application::ports::time::Clock;
use once_cell::sync::Lazy;

/// Noon keeps the local calendar day stable across test machine timezones.
static FIXED_NOW: Lazy<DateTime<Local>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T12:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Local)
});

pub fn fixed_now() -> DateTime<Local> {
    *FIXED_NOW
}

/// `YYYYMMDD` directory the fixed clock writes into.
pub fn fixed_run_dir() -> String {
    fixed_now().format("%Y%m%d").to_string()
}

#[derive(Default, Clone)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        fixed_now()
    }
}
