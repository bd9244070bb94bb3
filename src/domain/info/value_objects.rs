use crate::domain::errors::{DomainError, DomainResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use std::{fmt, str::FromStr};

pub const DATE_LAYOUT: &str = "%Y-%m-%d";
pub const TIMESTAMP_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";
pub const RUN_DATE_LAYOUT: &str = "%Y%m%d";

const END_OF_DAY_SECONDS: i64 = 86_399;

/// Deployment target of a generated script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    #[default]
    Staging,
    Production,
}

impl Environment {
    /// Every environment a run writes to, in output order.
    pub const ALL: [Environment; 2] = [Environment::Staging, Environment::Production];

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Staging => "stg",
            Environment::Production => "prod",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "stg" => Ok(Environment::Staging),
            "prod" => Ok(Environment::Production),
            other => Err(DomainError::Validation(format!(
                "unknown environment {other:?}, expected \"stg\" or \"prod\""
            ))),
        }
    }
}

/// Base URLs image links are built from, one per environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBaseUrls {
    staging: String,
    production: String,
}

impl ImageBaseUrls {
    pub fn new(staging: impl Into<String>, production: impl Into<String>) -> Self {
        Self {
            staging: staging.into(),
            production: production.into(),
        }
    }

    pub fn for_env(&self, env: Environment) -> &str {
        match env {
            Environment::Staging => &self.staging,
            Environment::Production => &self.production,
        }
    }

    pub fn image_url(&self, env: Environment, file_name: &ScriptFileName) -> String {
        format!("{}/images/{}.png", self.for_env(env), file_name)
    }
}

/// Stem shared by the output script and the banner image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptFileName(String);

impl ScriptFileName {
    /// The promo code wins verbatim; otherwise the title keeps only ASCII
    /// letters and digits.
    pub fn derive(promo_code: &str, title: &str) -> Self {
        if !promo_code.is_empty() {
            return Self(promo_code.to_string());
        }
        Self(title.chars().filter(char::is_ascii_alphanumeric).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn sql_file(&self) -> String {
        format!("{}.sql", self.0)
    }
}

impl fmt::Display for ScriptFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn parse_date(value: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_LAYOUT).map_err(|_| DomainError::InvalidDate {
        value: value.to_string(),
    })
}

/// Placeholder used when a campaign date cannot be parsed.
pub fn zero_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Active period of a campaign. The end day is inclusive up to 23:59:59.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampaignWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl CampaignWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: start.and_time(NaiveTime::MIN),
            end: end.and_time(NaiveTime::MIN) + TimeDelta::seconds(END_OF_DAY_SECONDS),
        }
    }

    pub fn start_timestamp(&self) -> String {
        self.start.format(TIMESTAMP_LAYOUT).to_string()
    }

    pub fn end_timestamp(&self) -> String {
        self.end.format(TIMESTAMP_LAYOUT).to_string()
    }
}
