use serde_json::Value;
use tracing::debug;
use crate::error::ClientError;
use crate::request::Requester;
use crate::transport::Transport;

pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Walk `endpoint?limit=L&page=N` from page 1 and flatten the pages in order
///
/// Stops at the first empty page, or after `max_pages` pages when given. A
/// page that is not a JSON array is an [`ClientError::InvalidResponse`].
pub async fn paginate<T: Transport>(
    requester: &Requester<T>,
    endpoint: &str,
    limit: u32,
    max_pages: Option<u32>,
) -> Result<Vec<Value>, ClientError> {
    let mut items = Vec::new();
    let mut page: u32 = 1;

    loop {
        if max_pages.map_or(false, |max| page > max) {
            break;
        }

        let page_endpoint = format!("{}?limit={}&page={}", endpoint, limit, page);
        let batch = match requester.get(&page_endpoint).await? {
            Value::Array(batch) => batch,
            other => {
                return Err(ClientError::InvalidResponse {
                    endpoint: page_endpoint,
                    reason: format!("expected an array page, got {}", json_kind(&other)),
                })
            }
        };

        let Some(first) = batch.first() else {
            break;
        };
        debug!("First item: {}", first);

        items.extend(batch);
        page += 1;
    }

    debug!("Fetched {} items from '{}' over {} pages", items.len(), endpoint, page - 1);
    Ok(items)
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
