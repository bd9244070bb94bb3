use super::InfoQueryCommandService;
use crate::{
    application::dto::GenerationReport,
    domain::info::{Campaign, Environment, InsertInfoStatement},
};

pub struct GenerateInfoQueryCommand {
    pub campaign: Campaign,
    /// Environment the caller asked for. Scripts are still produced for
    /// every environment.
    pub environment: Environment,
}

impl InfoQueryCommandService {
    /// Writes one `INSERT` per environment and target city.
    pub async fn generate(&self, command: GenerateInfoQueryCommand) -> GenerationReport {
        let campaign = command.campaign;
        let window = self.campaign_window(&campaign);
        let run_date = self.run_date();
        let cities = campaign.target_cities();

        tracing::debug!(
            requested_env = %command.environment,
            cities = cities.len(),
            "building insert statements"
        );

        let mut report = GenerationReport::default();
        for env in Environment::ALL {
            let image_url = campaign.image_url(&self.base_urls, env);
            let target = self.target(run_date, env, &campaign);

            for &city in &cities {
                let statement = InsertInfoStatement {
                    info_type: &campaign.info_type,
                    image_url: &image_url,
                    title: &campaign.title,
                    message: &campaign.message,
                    window: &window,
                    city,
                    promo_code: &campaign.promo_code,
                }
                .to_string();

                self.append_statement(&mut report, &target, statement).await;
            }
        }

        report
    }
}
