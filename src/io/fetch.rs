use tracing::warn;

/// Fetches the raw text of a remote CSV export.
///
/// One request, no retries. Any failure (connection error, non-2xx status,
/// undecodable body) is logged and reported as `None` so the caller can fall
/// back to an empty catalog instead of aborting.
pub fn fetch_text(url: &str) -> Option<String> {
    let response = match reqwest::blocking::get(url) {
        Ok(response) => response,
        Err(error) => {
            warn!(%url, %error, "CSV fetch failed");
            return None;
        }
    };

    let response = match response.error_for_status() {
        Ok(response) => response,
        Err(error) => {
            warn!(%url, %error, "CSV fetch returned error status");
            return None;
        }
    };

    match response.text() {
        Ok(text) => Some(text),
        Err(error) => {
            warn!(%url, %error, "CSV body could not be decoded");
            None
        }
    }
}
