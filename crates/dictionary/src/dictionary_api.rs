// https://dictionaryapi.dev/ - free, no key, english entries only

use reqwest::StatusCode;
use tracing::debug;

use crate::{decode_entries, LookupError, WordEntry};

pub const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en/";

pub(crate) async fn lookup(
    client: &reqwest::Client,
    base_url: &str,
    phrase: &str,
) -> Result<Vec<WordEntry>, LookupError> {
    // appended verbatim, the service expects the raw word as the last segment
    let url = format!("{base_url}{phrase}");
    debug!(%url, "looking up phrase");
    let res: reqwest::Response = client
        .get(&url)
        .send()
        .await
        .map_err(LookupError::Transport)?;
    debug!(status = %res.status(), "dictionary responded");
    check_status(res.status())?;
    let body = res.bytes().await.map_err(LookupError::Transport)?;
    let entries = decode_entries(&body)?;
    debug!(count = entries.len(), "decoded entries");
    Ok(entries)
}

/// Maps a response status to the lookup outcome it implies.
pub fn check_status(status: StatusCode) -> Result<(), LookupError> {
    match status {
        StatusCode::OK => Ok(()),
        StatusCode::NOT_FOUND => Err(LookupError::NotFound),
        _ => Err(LookupError::Service),
    }
}
