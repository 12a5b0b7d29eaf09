use super::prompts;
use crate::output::Output;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use owo_colors::OwoColorize;
use traktexport_client::auth::{authorization_url, exchange_code, fetch_username};
use traktexport_client::transport::create_trakt_client;
use traktexport_config::{Config, CredentialStore, PathManager, TraktConfig};

/// Authorize against Trakt once and store the tokens for later exports
pub async fn run_auth(username: &str, output: &Output) -> Result<()> {
    let path_manager = PathManager::new().map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    path_manager
        .ensure_directories()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to create configuration directories: {}", e))?;

    let config_file = path_manager.config_file();
    let mut config = Config::load_or_default(&config_file)
        .map_err(|e| {
            color_eyre::eyre::eyre!("Failed to load config from {}: {}", config_file.display(), e)
        })?;

    if !config.is_trakt_configured() {
        output.info("Trakt API application not configured yet.");
        output.info("Create one at https://trakt.tv/oauth/applications");
        output.info("and set its redirect URI to 'urn:ietf:wg:oauth:2.0:oob'.");
        let client_id = prompts::prompt_string("Trakt Client ID", None)?;
        let client_secret = prompts::prompt_password("Trakt Client Secret")?;
        config.trakt = Some(TraktConfig { client_id, client_secret });
        config
            .validate()
            .map_err(|e| color_eyre::eyre::eyre!("Invalid Trakt configuration: {}", e))?;
        config
            .save_to_file(&config_file)
            .map_err(|e| {
                color_eyre::eyre::eyre!("Failed to save config to {}: {}", config_file.display(), e)
            })?;
        output.success(format!("Saved API credentials to {}", config_file.display()));
    }

    let trakt = config
        .trakt
        .as_ref()
        .ok_or_else(|| color_eyre::eyre::eyre!("Trakt is not configured"))?;

    output.info("");
    output.info("Please visit the following URL to authorize this application:");
    output.info(format!("{}", authorization_url(&trakt.client_id).bright_cyan()));
    output.info("");
    let code = prompts::prompt_string("Authorization code", None)?;

    let client = create_trakt_client(config.requests.timeout());
    let token = exchange_code(&client, &trakt.client_id, &trakt.client_secret, &code)
        .await
        .wrap_err("Failed to exchange authorization code")?;

    match fetch_username(&client, &trakt.client_id, &token.access_token).await {
        Ok(account) if !account.eq_ignore_ascii_case(username) => output.warn(format!(
            "Token belongs to '{}', not '{}'; exports of '{}' will only see public data",
            account, username, username
        )),
        Ok(_) => {}
        Err(e) => tracing::debug!("Could not verify account for token: {}", e),
    }

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
    store.clear_trakt();
    token.store_into(&mut store);
    store.set_trakt_username(username.to_string());
    store
        .save()
        .map_err(|e| {
            color_eyre::eyre::eyre!(
                "Failed to save credentials to {}: {}",
                credentials_file.display(),
                e
            )
        })?;

    output.success(format!("Authenticated as {}", username));
    Ok(())
}
