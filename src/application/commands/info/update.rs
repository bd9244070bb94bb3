use super::InfoQueryCommandService;
use crate::{
    application::{
        dto::GenerationReport,
        error::{ApplicationError, ApplicationResult},
    },
    domain::info::{
        Campaign, Environment, PriorState, UpdateInfoStatement, value_objects::parse_date,
    },
};

pub struct UpdateInfoQueryCommand {
    pub campaign: Campaign,
    pub created_at: String,
    pub prev_image_url: String,
    pub environment: Environment,
}

impl UpdateInfoQueryCommand {
    pub fn builder() -> UpdateInfoQueryCommandBuilder {
        UpdateInfoQueryCommandBuilder::default()
    }

    /// `created_at` must be a `YYYY-MM-DD` date and `prev_image_url` must
    /// be present.
    pub fn prior_state(&self) -> ApplicationResult<PriorState> {
        let created_at = parse_date(&self.created_at)
            .map_err(|_| ApplicationError::validation("invalid created_at"))?;

        if self.prev_image_url.is_empty() {
            return Err(ApplicationError::validation("missing prev image url"));
        }

        Ok(PriorState {
            created_at,
            prev_image_url: self.prev_image_url.clone(),
        })
    }
}

#[derive(Default)]
pub struct UpdateInfoQueryCommandBuilder {
    campaign: Campaign,
    created_at: Option<String>,
    prev_image_url: Option<String>,
    environment: Environment,
}

impl UpdateInfoQueryCommandBuilder {
    pub fn campaign(mut self, campaign: Campaign) -> Self {
        self.campaign = campaign;
        self
    }

    pub fn created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }

    pub fn prev_image_url(mut self, prev_image_url: impl Into<String>) -> Self {
        self.prev_image_url = Some(prev_image_url.into());
        self
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn build(self) -> Result<UpdateInfoQueryCommand, &'static str> {
        Ok(UpdateInfoQueryCommand {
            campaign: self.campaign,
            created_at: self.created_at.ok_or("created_at is required")?,
            prev_image_url: self.prev_image_url.ok_or("prev_image_url is required")?,
            environment: self.environment,
        })
    }
}

impl InfoQueryCommandService {
    /// Writes one `UPDATE` per environment. Rows are matched on promo code,
    /// the environment's image URL and their creation day. `prev_image_url`
    /// only gates the request.
    pub async fn update(
        &self,
        command: UpdateInfoQueryCommand,
    ) -> ApplicationResult<GenerationReport> {
        let prior = command.prior_state()?;
        let campaign = command.campaign;
        let window = self.campaign_window(&campaign);
        let run_date = self.run_date();

        tracing::debug!(
            requested_env = %command.environment,
            created_at = %prior.created_at,
            prev_image_url = %prior.prev_image_url,
            "building update statements"
        );

        let mut report = GenerationReport::default();
        for env in Environment::ALL {
            let image_url = campaign.image_url(&self.base_urls, env);
            let target = self.target(run_date, env, &campaign);
            let statement = UpdateInfoStatement {
                title: &campaign.title,
                message: &campaign.message,
                window: &window,
                promo_code: &campaign.promo_code,
                image_url: &image_url,
                created_at: prior.created_at,
            }
            .to_string();

            self.append_statement(&mut report, &target, statement).await;
        }

        Ok(report)
    }
}
