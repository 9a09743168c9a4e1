use std::time::Duration;

use glossa_config::dictionary::DictionaryConfig;
use glossa_types::WordEntry;
use reqwest::Url;
use serde_json::Value;

use crate::error::FetchError;

/// Remote dictionary lookup
#[async_trait::async_trait]
pub trait DictionaryClient: Send + Sync {
    /// Fetch the entry for `term`; `Ok(None)` when the dictionary has none
    async fn lookup(&self, term: &str) -> Result<Option<WordEntry>, FetchError>;
}

/// Client for dictionaryapi.dev style endpoints:
/// `GET <base>/<word>` answering with a JSON array of entries
#[derive(Clone)]
pub struct DictionaryApiClient {
    client: reqwest::Client,
    base_url: Url,
}

impl DictionaryApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let base_url =
            Url::parse(base_url).map_err(|e| FetchError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(base_url.to_string()));
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &DictionaryConfig) -> Result<Self, FetchError> {
        Self::new(&config.api_url, Duration::from_secs(config.timeout_seconds))
    }

    /// Request URL for `term`, which is percent-encoded as a single path segment
    pub fn entry_url(&self, term: &str) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(term);
        Ok(url)
    }
}

#[async_trait::async_trait]
impl DictionaryClient for DictionaryApiClient {
    async fn lookup(&self, term: &str) -> Result<Option<WordEntry>, FetchError> {
        let url = self.entry_url(term)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        // Unknown words come back as 404 with a JSON object body, so the
        // status alone says nothing about whether the body is usable.
        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!("Dictionary answered {} ({} bytes)", status, body.len());

        parse_entries(&body)
    }
}

/// Decode an API response body: the first element of a non-empty array is the
/// entry, any other JSON value means no entry was found.
pub fn parse_entries(body: &[u8]) -> Result<Option<WordEntry>, FetchError> {
    let json: Value = serde_json::from_slice(body)?;

    match json {
        Value::Array(items) => {
            let entry = items.into_iter().next().map(WordEntry::from_value).transpose()?;
            Ok(entry)
        }
        _ => Ok(None),
    }
}
