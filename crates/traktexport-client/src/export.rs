//! Assembling raw export documents from the Trakt API
//!
//! The output is the unparsed JSON Trakt returned, stitched into one object.
//! Parsing into the typed model is a separate step so a saved export can be
//! re-read by newer versions of the parser.

use serde_json::{Map, Value};
use tracing::info;
use crate::error::ClientError;
use crate::paginate::{json_kind, paginate, DEFAULT_PAGE_SIZE};
use crate::request::Requester;
use crate::transport::Transport;

pub struct Exporter<T> {
    requester: Requester<T>,
    page_size: u32,
}

impl<T: Transport> Exporter<T> {
    pub fn new(requester: Requester<T>) -> Self {
        Self {
            requester,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn requester(&self) -> &Requester<T> {
        &self.requester
    }

    /// Every account section plus the complete history
    pub async fn full_export(&self, username: &str) -> Result<Value, ClientError> {
        self.ensure_authenticated()?;
        let user = user_path(username);
        info!("Starting full export for {}", username);

        let mut doc = Map::new();
        doc.insert("type".to_string(), Value::from("full"));
        doc.insert("username".to_string(), Value::from(username));
        doc.insert("followers".to_string(), self.get(&format!("{user}/followers")).await?);
        doc.insert("following".to_string(), self.get(&format!("{user}/following")).await?);
        doc.insert("settings".to_string(), self.get("users/settings").await?);
        doc.insert("likes".to_string(), self.get("users/likes").await?);
        doc.insert("profile".to_string(), self.get(&user).await?);
        doc.insert("comments".to_string(), self.get(&format!("{user}/comments")).await?);
        doc.insert("lists".to_string(), self.get(&format!("{user}/lists")).await?);
        doc.insert("ratings".to_string(), self.get(&format!("{user}/ratings")).await?);
        doc.insert(
            "recommendations".to_string(),
            self.get(&format!("{user}/recommendations")).await?,
        );
        doc.insert("watchlist".to_string(), self.get(&format!("{user}/watchlist")).await?);
        doc.insert(
            "watched".to_string(),
            self.concat(&format!("{user}/watched/movies"), &format!("{user}/watched/shows"))
                .await?,
        );
        doc.insert(
            "collection".to_string(),
            self.concat(&format!("{user}/collection/movies"), &format!("{user}/collection/shows"))
                .await?,
        );
        doc.insert("stats".to_string(), self.get(&format!("{user}/stats")).await?);

        let history = self.history(&user, None).await?;
        info!("Full export for {} done: {} history entries", username, history.len());
        doc.insert("history".to_string(), Value::Array(history));

        Ok(Value::Object(doc))
    }

    /// Only the history, optionally stopping after `pages` pages
    pub async fn partial_export(
        &self,
        username: &str,
        pages: Option<u32>,
    ) -> Result<Value, ClientError> {
        self.ensure_authenticated()?;
        let user = user_path(username);
        info!("Starting partial export for {}", username);

        let history = self.history(&user, pages).await?;
        info!("Partial export for {} done: {} history entries", username, history.len());

        let mut doc = Map::new();
        doc.insert("type".to_string(), Value::from("partial"));
        doc.insert("history".to_string(), Value::Array(history));
        Ok(Value::Object(doc))
    }

    fn ensure_authenticated(&self) -> Result<(), ClientError> {
        if self.requester.is_authenticated() {
            Ok(())
        } else {
            Err(ClientError::NotAuthenticated)
        }
    }

    async fn get(&self, endpoint: &str) -> Result<Value, ClientError> {
        self.requester.get(endpoint).await
    }

    async fn history(&self, user: &str, pages: Option<u32>) -> Result<Vec<Value>, ClientError> {
        paginate(&self.requester, &format!("{user}/history"), self.page_size, pages).await
    }

    async fn concat(&self, first: &str, second: &str) -> Result<Value, ClientError> {
        let mut items = expect_array(first, self.get(first).await?)?;
        items.extend(expect_array(second, self.get(second).await?)?);
        Ok(Value::Array(items))
    }
}

fn user_path(username: &str) -> String {
    format!("users/{}", urlencoding::encode(username))
}

fn expect_array(endpoint: &str, value: Value) -> Result<Vec<Value>, ClientError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(ClientError::InvalidResponse {
            endpoint: endpoint.to_string(),
            reason: format!("expected an array, got {}", json_kind(&other)),
        }),
    }
}
