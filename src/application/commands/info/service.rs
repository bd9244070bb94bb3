// src/application/commands/info/service.rs
use std::sync::Arc;

use chrono::NaiveDate;

use crate::{
    application::{
        dto::GenerationReport,
        ports::{
            script::{ScriptTarget, ScriptWriter},
            time::Clock,
        },
    },
    domain::info::{
        Campaign, CampaignWindow, Environment, ImageBaseUrls,
        value_objects::{parse_date, zero_date},
    },
};

const STATEMENT_SEPARATOR: &str = "\n\n";

pub struct InfoQueryCommandService {
    pub(super) writer: Arc<dyn ScriptWriter>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) base_urls: ImageBaseUrls,
}

impl InfoQueryCommandService {
    pub fn new(
        writer: Arc<dyn ScriptWriter>,
        clock: Arc<dyn Clock>,
        base_urls: ImageBaseUrls,
    ) -> Self {
        Self {
            writer,
            clock,
            base_urls,
        }
    }

    /// Unparseable dates degrade to `0001-01-01` so the run still produces
    /// a reviewable script.
    pub(super) fn campaign_window(&self, campaign: &Campaign) -> CampaignWindow {
        CampaignWindow::new(
            lenient_date("start_time", &campaign.start_date),
            lenient_date("end_date", &campaign.end_date),
        )
    }

    pub(super) fn target(
        &self,
        run_date: NaiveDate,
        env: Environment,
        campaign: &Campaign,
    ) -> ScriptTarget {
        ScriptTarget {
            run_date,
            environment: env,
            file_name: campaign.file_name().sql_file(),
        }
    }

    pub(super) fn run_date(&self) -> NaiveDate {
        self.clock.now().date_naive()
    }

    /// Appends one statement followed by a blank line. Failures are logged
    /// and recorded, never retried.
    pub(super) async fn append_statement(
        &self,
        report: &mut GenerationReport,
        target: &ScriptTarget,
        statement: String,
    ) {
        let path = target.relative_path();
        let contents = format!("{statement}{STATEMENT_SEPARATOR}");

        match self.writer.append(target, &contents).await {
            Ok(()) => report.record_written(path),
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "failed to append statement");
                report.record_failure(path, err.to_string());
            }
        }
    }
}

fn lenient_date(field: &'static str, value: &str) -> NaiveDate {
    parse_date(value).unwrap_or_else(|err| {
        tracing::warn!(field, error = %err, "falling back to zero date");
        zero_date()
    })
}
