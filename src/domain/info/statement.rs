// src/domain/info/statement.rs
use super::value_objects::{CampaignWindow, DATE_LAYOUT};
use chrono::NaiveDate;
use std::fmt;

/// Quotes a value as a SQL string literal, doubling embedded quotes.
pub fn sql_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// One `infos` row for a single city.
#[derive(Debug, Clone)]
pub struct InsertInfoStatement<'a> {
    pub info_type: &'a str,
    pub image_url: &'a str,
    pub title: &'a str,
    pub message: &'a str,
    pub window: &'a CampaignWindow,
    pub city: &'a str,
    pub promo_code: &'a str,
}

impl fmt::Display for InsertInfoStatement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "INSERT INTO infos (info_type, image_url, title, message, start_date, end_date, city, promocode, created_at, updated_at, deleted_at, is_active)\n\tVALUES({}, {}, {}, {}, {}, {}, {}, {}, now(), now(), NULL, true);",
            sql_literal(self.info_type),
            sql_literal(self.image_url),
            sql_literal(self.title),
            sql_literal(self.message),
            sql_literal(&self.window.start_timestamp()),
            sql_literal(&self.window.end_timestamp()),
            sql_literal(self.city),
            sql_literal(self.promo_code),
        )
    }
}

/// Rewrites the copy and schedule of rows created on `created_at`.
#[derive(Debug, Clone)]
pub struct UpdateInfoStatement<'a> {
    pub title: &'a str,
    pub message: &'a str,
    pub window: &'a CampaignWindow,
    pub promo_code: &'a str,
    pub image_url: &'a str,
    pub created_at: NaiveDate,
}

impl fmt::Display for UpdateInfoStatement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UPDATE infos SET title = {}, message = {}, start_date = {}, end_date = {}, updated_at = now()\n\tWHERE promocode = {} and image_url = {} and created_at::date = {};",
            sql_literal(self.title),
            sql_literal(self.message),
            sql_literal(&self.window.start_timestamp()),
            sql_literal(&self.window.end_timestamp()),
            sql_literal(self.promo_code),
            sql_literal(self.image_url),
            sql_literal(&self.created_at.format(DATE_LAYOUT).to_string()),
        )
    }
}
