use tracing::{info, warn};

use crate::{
    domain::common::{LeafdocConfig, UpstreamConfig, services::Service},
    infrastructure::{
        analysis::PostgresAnalysisRepository,
        db::postgres::{Postgres, PostgresConfig},
        upstream::WebhookDiagnosticClient,
    },
};

pub type LeafdocService = Service<WebhookDiagnosticClient, PostgresAnalysisRepository>;

pub async fn create_service(config: LeafdocConfig) -> Result<LeafdocService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;
    postgres.migrate().await?;

    let upstream = create_upstream(&config.upstream)?;
    let analysis_repository = PostgresAnalysisRepository::new(postgres.get_db());

    Ok(Service::new(upstream, analysis_repository))
}

/// Builds the webhook client, or `None` when no endpoint is configured.
pub fn create_upstream(
    config: &UpstreamConfig,
) -> Result<Option<WebhookDiagnosticClient>, anyhow::Error> {
    let Some(webhook_url) = config.endpoint() else {
        warn!("No upstream webhook configured, every diagnosis will use the fallback record");
        return Ok(None);
    };

    info!(webhook_url, "Upstream diagnostic webhook configured");
    let client = WebhookDiagnosticClient::new(webhook_url.to_string(), config.timeout)?;

    Ok(Some(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_endpoint_means_no_upstream() {
        let upstream = create_upstream(&UpstreamConfig::default()).unwrap();
        assert!(upstream.is_none());
    }

    #[test]
    fn test_endpoint_builds_client() {
        let config = UpstreamConfig {
            webhook_url: Some("http://localhost:5678/webhook/leaf".to_string()),
            ..Default::default()
        };

        let upstream = create_upstream(&config).unwrap().unwrap();
        assert_eq!(upstream.webhook_url(), "http://localhost:5678/webhook/leaf");
    }
}
