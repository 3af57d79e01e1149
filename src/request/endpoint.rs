//! Scrape endpoint URL construction.
//!
//! The analysis service exposes a single operation:
//! `GET <base>/api/scrape?topic=<escaped topic>`. This module builds that URL from
//! the configured base, delegating all escaping to the `url` crate so arbitrary
//! user input survives the trip intact.

use crate::domain::{Result, ZentimentError};
use url::Url;

/// Path of the scrape operation on the analysis service.
const SCRAPE_PATH: &str = "/api/scrape";

/// Builds the full scrape URL for a topic.
///
/// The topic is attached as the `topic` query parameter with standard
/// form escaping, so spaces, ampersands, and non-ASCII input are safe.
///
/// # Errors
///
/// Returns [`ZentimentError::Endpoint`] if the configured base is not a valid
/// absolute URL or cannot carry the scrape path.
///
/// # Examples
///
/// ```
/// use zentiment::request::scrape_url;
///
/// let url = scrape_url("http://127.0.0.1:8000", "rust language").unwrap();
/// assert_eq!(url, "http://127.0.0.1:8000/api/scrape?topic=rust+language");
/// ```
pub fn scrape_url(base: &str, topic: &str) -> Result<String> {
    let parsed = Url::parse(base).map_err(|e| ZentimentError::Endpoint(e.to_string()))?;

    let mut url = parsed
        .join(SCRAPE_PATH)
        .map_err(|e| ZentimentError::Endpoint(e.to_string()))?;

    url.query_pairs_mut().append_pair("topic", topic);

    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_reserved_characters_in_topic() {
        let url = scrape_url("http://localhost:8000", "c++ & rust?").unwrap();
        assert_eq!(url, "http://localhost:8000/api/scrape?topic=c%2B%2B+%26+rust%3F");
    }

    #[test]
    fn joins_path_regardless_of_trailing_slash() {
        let bare = scrape_url("http://localhost:8000", "topic").unwrap();
        let slashed = scrape_url("http://localhost:8000/", "topic").unwrap();
        assert_eq!(bare, slashed);
    }

    #[test]
    fn rejects_a_relative_base() {
        let err = scrape_url("/api", "topic").unwrap_err();
        assert!(matches!(err, ZentimentError::Endpoint(_)));
    }
}
