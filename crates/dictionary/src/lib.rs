use dictionary_api::lookup;

mod dictionary;
mod dictionary_api;

pub use dictionary::{decode_entries, Definition, Meaning, Phonetic, WordEntry};
pub use dictionary_api::{check_status, DICTIONARY_API_URL};

/// Reasons a lookup can fail. None of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The request never produced a complete response.
    #[error("{0}")]
    Transport(#[source] reqwest::Error),
    #[error("Couldn't find word.")]
    NotFound,
    /// Any status other than 200 or 404.
    #[error("Something went wrong.")]
    Service,
    #[error("{0}")]
    Decode(#[source] serde_json::Error),
}

pub struct Dictionary {
    client: reqwest::Client,
    base_url: String,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_base_url(DICTIONARY_API_URL)
    }

    /// Points the lookups at another endpoint. The phrase is appended to
    /// `base_url` as-is, so it should end with a `/`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn lookup(&self, phrase: &str) -> Result<Vec<WordEntry>, LookupError> {
        lookup(&self.client, &self.base_url, phrase).await
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
