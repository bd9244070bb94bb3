pub mod cities;
pub mod entity;
pub mod statement;
pub mod value_objects;

pub use cities::DEFAULT_CITIES;
pub use entity::{Campaign, PriorState};
pub use statement::{InsertInfoStatement, UpdateInfoStatement};
pub use value_objects::{CampaignWindow, Environment, ImageBaseUrls, ScriptFileName};
