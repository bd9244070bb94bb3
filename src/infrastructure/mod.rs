pub mod scripts;
pub mod time;
