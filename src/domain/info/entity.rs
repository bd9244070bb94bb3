use super::{
    cities::DEFAULT_CITIES,
    value_objects::{Environment, ImageBaseUrls, ScriptFileName},
};
use chrono::NaiveDate;

/// A promotional info banner as submitted by the operator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Campaign {
    pub info_type: String,
    pub title: String,
    pub message: String,
    pub start_date: String,
    pub end_date: String,
    pub cities: Vec<String>,
    pub promo_code: String,
}

impl Campaign {
    pub fn file_name(&self) -> ScriptFileName {
        ScriptFileName::derive(&self.promo_code, &self.title)
    }

    pub fn image_url(&self, base_urls: &ImageBaseUrls, env: Environment) -> String {
        base_urls.image_url(env, &self.file_name())
    }

    /// Cities the campaign runs in, falling back to [`DEFAULT_CITIES`].
    pub fn target_cities(&self) -> Vec<&str> {
        if self.cities.is_empty() {
            DEFAULT_CITIES.to_vec()
        } else {
            self.cities.iter().map(String::as_str).collect()
        }
    }
}

/// Identifies the rows an update rewrites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorState {
    pub created_at: NaiveDate,
    pub prev_image_url: String,
}
