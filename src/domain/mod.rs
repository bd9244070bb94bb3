pub mod errors;
pub mod info;
