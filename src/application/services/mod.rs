// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::info::InfoQueryCommandService,
        ports::{script::ScriptWriter, time::Clock},
    },
    domain::info::ImageBaseUrls,
};

pub struct ApplicationServices {
    pub info_commands: Arc<InfoQueryCommandService>,
}

impl ApplicationServices {
    pub fn new(
        script_writer: Arc<dyn ScriptWriter>,
        clock: Arc<dyn Clock>,
        base_urls: ImageBaseUrls,
    ) -> Self {
        let info_commands = Arc::new(InfoQueryCommandService::new(
            Arc::clone(&script_writer),
            Arc::clone(&clock),
            base_urls,
        ));

        Self { info_commands }
    }
}
