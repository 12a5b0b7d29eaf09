use crate::output::Output;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use traktexport_client::auth::ensure_session;
use traktexport_client::transport::create_trakt_client;
use traktexport_client::{Exporter, HttpTransport, Requester, RetryPolicy};
use traktexport_config::{Config, CredentialStore, PathManager, RequestConfig};

pub async fn run_export(username: &str, output: &Output) -> Result<()> {
    let exporter = build_exporter(username, output).await?;
    let doc = exporter
        .full_export(username)
        .await
        .wrap_err_with(|| format!("Full export of {} failed", username))?;
    output.data(&doc)?;
    Ok(())
}

pub async fn run_partial_export(username: &str, pages: Option<u32>, output: &Output) -> Result<()> {
    let exporter = build_exporter(username, output).await?;
    let doc = exporter
        .partial_export(username, pages)
        .await
        .wrap_err_with(|| format!("Partial export of {} failed", username))?;
    output.data(&doc)?;
    Ok(())
}

pub fn retry_policy(requests: &RequestConfig) -> RetryPolicy {
    RetryPolicy::new(requests.backoff_base(), requests.max_attempts, requests.max_backoff())
}

/// Config, credentials and session, wired into an exporter
async fn build_exporter(username: &str, output: &Output) -> Result<Exporter<HttpTransport>> {
    let path_manager = PathManager::new().map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    let config_file = path_manager.config_file();
    let config = Config::load_or_default(&config_file)
        .map_err(|e| {
            color_eyre::eyre::eyre!("Failed to load config from {}: {}", config_file.display(), e)
        })?;
    config
        .validate()
        .map_err(|e| color_eyre::eyre::eyre!("Configuration validation failed: {}", e))?;
    let trakt = config
        .trakt
        .as_ref()
        .ok_or_else(|| color_eyre::eyre::eyre!("Trakt is not configured"))?;

    let credentials_file = path_manager.credentials_file();
    let mut store = CredentialStore::new(credentials_file.clone());
    store
        .load()
        .map_err(|e| {
            color_eyre::eyre::eyre!(
                "Failed to load credentials from {}: {}",
                credentials_file.display(),
                e
            )
        })?;

    let client = create_trakt_client(config.requests.timeout());
    let session =
        ensure_session(&client, &mut store, &trakt.client_id, &trakt.client_secret).await?;
    if let Some(authed) = session.username() {
        if !authed.eq_ignore_ascii_case(username) {
            output.warn(format!("Authenticated as '{}' but exporting '{}'", authed, username));
        }
    }
    tracing::debug!("Using {:?}", session);

    let transport = HttpTransport::new(Some(session), config.requests.timeout());
    let requester = Requester::new(transport)
        .with_policy(retry_policy(&config.requests))
        .with_request_delay(config.requests.delay());
    Ok(Exporter::new(requester).with_page_size(config.requests.page_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_retry_policy_from_config() {
        let requests = RequestConfig {
            backoff_base_secs: 4,
            max_attempts: Some(5),
            max_backoff_secs: Some(60),
            ..RequestConfig::default()
        };
        let policy = retry_policy(&requests);
        assert_eq!(policy.base_delay, Duration::from_secs(4));
        assert_eq!(policy.max_attempts, Some(5));
        assert_eq!(policy.max_delay, Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_default_retry_policy_matches_client_default() {
        assert_eq!(retry_policy(&RequestConfig::default()), RetryPolicy::default());
    }
}
