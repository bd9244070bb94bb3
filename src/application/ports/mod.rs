// src/application/ports/mod.rs
pub mod script;
pub mod time;
