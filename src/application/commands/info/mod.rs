mod generate;
mod service;
mod update;

pub use generate::GenerateInfoQueryCommand;
pub use service::InfoQueryCommandService;
pub use update::{UpdateInfoQueryCommand, UpdateInfoQueryCommandBuilder};
