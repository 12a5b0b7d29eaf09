use chrono::{DateTime, Duration, Utc};
use std::fmt;
use traktexport_config::CredentialStore;
use crate::error::ClientError;

/// Credentials for one authenticated Trakt account
///
/// Built once at startup from the credential store and handed to the
/// transport. Nothing else holds auth state.
#[derive(Clone)]
pub struct Session {
    access_token: String,
    client_id: String,
    username: Option<String>,
    expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(access_token: String, client_id: String) -> Self {
        Self {
            access_token,
            client_id,
            username: None,
            expires_at: None,
        }
    }

    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    pub fn from_store(store: &CredentialStore, client_id: &str) -> Result<Self, ClientError> {
        let access_token = store
            .get_trakt_access_token()
            .filter(|token| !token.is_empty())
            .ok_or(ClientError::NotAuthenticated)?;

        let mut session = Session::new(access_token.clone(), client_id.to_string());
        session.username = store.get_trakt_username().cloned();
        session.expires_at = store.get_trakt_token_expires();
        Ok(session)
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Token present and, if its expiry is known, not yet expired
    pub fn is_valid(&self) -> bool {
        !self.access_token.is_empty() && self.expires_at.map_or(true, |exp| exp > Utc::now())
    }

    /// Expired or expiring within the next five minutes
    pub fn needs_refresh(&self) -> bool {
        self.expires_at
            .map_or(false, |exp| exp <= Utc::now() + Duration::minutes(5))
    }

    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"********")
            .field("client_id", &self.client_id)
            .field("username", &self.username)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
