//! OAuth against Trakt's token endpoint
//!
//! The authorization-code flow with an out-of-band redirect: the user opens
//! [`authorization_url`], pastes the code back, and [`exchange_code`] trades it
//! for tokens. Prompting is the caller's job.

use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};
use traktexport_config::CredentialStore;
use crate::error::ClientError;
use crate::session::Session;
use crate::transport::BASE_URL;

const REDIRECT_URI: &str = "urn:ietf:wg:oauth:2.0:oob";
const TOKEN_URL: &str = "https://api.trakt.tv/oauth/token";
const AUTHORIZE_URL: &str = "https://trakt.tv/oauth/authorize";

/// Seconds shaved off `expires_in` so a token is refreshed before Trakt rejects it
const EXPIRY_MARGIN_SECS: i64 = 120;
/// Ten years; anything longer is treated as this
const MAX_TOKEN_LIFETIME_SECS: i64 = 315_360_000;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    expires_in: u64,
}

#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

impl TokenInfo {
    fn from_response(response: TokenResponse, now: DateTime<Utc>) -> Self {
        let lifetime = i64::try_from(response.expires_in)
            .unwrap_or(MAX_TOKEN_LIFETIME_SECS)
            .min(MAX_TOKEN_LIFETIME_SECS);
        Self {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            expires_at: now + Duration::seconds(lifetime.saturating_sub(EXPIRY_MARGIN_SECS)),
        }
    }

    pub fn store_into(&self, store: &mut CredentialStore) {
        store.set_trakt_access_token(self.access_token.clone());
        store.set_trakt_refresh_token(self.refresh_token.clone());
        store.set_trakt_token_expires(self.expires_at);
    }
}

pub fn authorization_url(client_id: &str) -> String {
    format!(
        "{}?response_type=code&client_id={}&redirect_uri={}",
        AUTHORIZE_URL,
        urlencoding::encode(client_id),
        urlencoding::encode(REDIRECT_URI)
    )
}

pub async fn exchange_code(
    client: &Client,
    client_id: &str,
    client_secret: &str,
    code: &str,
) -> Result<TokenInfo, ClientError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(ClientError::Auth("authorization code cannot be empty".to_string()));
    }

    let payload = serde_json::json!({
        "code": code,
        "client_id": client_id,
        "client_secret": client_secret,
        "redirect_uri": REDIRECT_URI,
        "grant_type": "authorization_code"
    });
    request_token(client, &payload, "exchange authorization code").await
}

pub async fn refresh_access_token(
    client: &Client,
    client_id: &str,
    client_secret: &str,
    refresh_token: &str,
) -> Result<TokenInfo, ClientError> {
    let payload = serde_json::json!({
        "refresh_token": refresh_token,
        "client_id": client_id,
        "client_secret": client_secret,
        "redirect_uri": REDIRECT_URI,
        "grant_type": "refresh_token"
    });
    request_token(client, &payload, "refresh token").await
}

async fn request_token(
    client: &Client,
    payload: &Value,
    action: &str,
) -> Result<TokenInfo, ClientError> {
    let response = client
        .post(TOKEN_URL)
        .json(payload)
        .header("Accept", "application/json")
        .header("Content-Type", "application/json")
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        return Err(ClientError::Auth(format!(
            "failed to {}: {} - {}",
            action, status, error_text
        )));
    }

    let token_response: TokenResponse = response.json().await?;
    Ok(TokenInfo::from_response(token_response, Utc::now()))
}

/// The slug of the account a freshly issued token belongs to
pub async fn fetch_username(
    client: &Client,
    client_id: &str,
    access_token: &str,
) -> Result<String, ClientError> {
    let url = format!("{}users/me", BASE_URL);
    let response = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", access_token))
        .header("trakt-api-version", "2")
        .header("trakt-api-key", client_id)
        .header("Content-Type", "application/json")
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(ClientError::Auth(format!("failed to fetch profile: {}", response.status())));
    }

    let body: Value = response.json().await?;
    body.get("ids")
        .and_then(|ids| ids.get("slug"))
        .or_else(|| body.get("username"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ClientError::InvalidResponse {
            endpoint: "users/me".to_string(),
            reason: "no username in profile".to_string(),
        })
}

/// Load the stored session, refreshing and persisting the token when it is
/// close to expiry and a refresh token is on file
pub async fn ensure_session(
    client: &Client,
    store: &mut CredentialStore,
    client_id: &str,
    client_secret: &str,
) -> Result<Session, ClientError> {
    let session = Session::from_store(store, client_id)?;
    if !session.needs_refresh() {
        return Ok(session);
    }

    let Some(refresh_token) = store.get_trakt_refresh_token().cloned() else {
        debug!("Token near expiry and no refresh token stored");
        return Ok(session);
    };

    info!("Refreshing Trakt access token");
    let token = refresh_access_token(client, client_id, client_secret, &refresh_token).await?;
    token.store_into(store);
    store
        .save()
        .map_err(|e| ClientError::Auth(format!("failed to save refreshed token: {e}")))?;
    Session::from_store(store, client_id)
}
