//! Analysis payload domain model.
//!
//! This module defines the types decoded from the analysis service response:
//! the top-level [`AnalysisResult`], scraped [`Article`]s, and sentiment-bucketed
//! [`Mentions`]. The serde shapes mirror the wire contract exactly
//! (`name`, `articles[]`, `mentions.{positive,neutral,negative}`), so decoding is a
//! single `serde_json::from_slice` call with no manual field plumbing.
//!
//! All types are plain data. Derivations consumed by the UI (per-category counts,
//! sentiment labels) are small pure helpers with no failure modes.

use serde::{Deserialize, Serialize};

/// A fully analyzed topic as returned by the analysis service.
///
/// One `AnalysisResult` is held per successful search, inside
/// [`RequestState::Success`](crate::app::RequestState::Success). It is replaced
/// wholesale at the start of the next search and never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Identifier of the analyzed subject, as the service names it.
    pub name: String,

    /// Scraped source documents, in the order the service returned them.
    pub articles: Vec<Article>,

    /// Quoted excerpts bucketed by sentiment category.
    pub mentions: Mentions,
}

/// A scraped source document with an external URL and a generated summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Headline of the source document.
    pub title: String,

    /// External URL the document was scraped from.
    pub url: String,

    /// Raw scraped text.
    pub text: String,

    /// Service-generated summary of the text.
    pub summary: String,
}

/// Quoted excerpts grouped into the three sentiment categories.
///
/// The categories are unordered free-text quotes; their lengths drive the
/// mention-count chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Mentions {
    /// Quotes the service classified as positive.
    pub positive: Vec<String>,

    /// Quotes the service classified as neutral.
    pub neutral: Vec<String>,

    /// Quotes the service classified as negative.
    pub negative: Vec<String>,
}

impl Mentions {
    /// Returns the count for a single sentiment category.
    #[must_use]
    pub fn count(&self, sentiment: Sentiment) -> usize {
        self.for_sentiment(sentiment).len()
    }

    /// Returns the quotes for a single sentiment category.
    #[must_use]
    pub fn for_sentiment(&self, sentiment: Sentiment) -> &[String] {
        match sentiment {
            Sentiment::Positive => &self.positive,
            Sentiment::Neutral => &self.neutral,
            Sentiment::Negative => &self.negative,
        }
    }

    /// Total number of quotes across all categories.
    #[must_use]
    pub fn total(&self) -> usize {
        self.positive.len() + self.neutral.len() + self.negative.len()
    }

    /// Iterates all quotes paired with their sentiment, positive first.
    ///
    /// Used by the mentions list view, which flattens the three buckets into one
    /// scrollable sequence.
    pub fn tagged(&self) -> impl Iterator<Item = (Sentiment, &str)> {
        Sentiment::ALL.into_iter().flat_map(move |sentiment| {
            self.for_sentiment(sentiment)
                .iter()
                .map(move |quote| (sentiment, quote.as_str()))
        })
    }
}

/// Sentiment category of a mention.
///
/// Order in [`Sentiment::ALL`] is the display order of chart rows and the
/// flattened mentions list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    /// Favorable coverage.
    Positive,
    /// Coverage with no clear polarity.
    Neutral,
    /// Unfavorable coverage.
    Negative,
}

impl Sentiment {
    /// All categories in display order.
    pub const ALL: [Self; 3] = [Self::Positive, Self::Neutral, Self::Negative];

    /// Human-readable category label used in chart rows and mention tags.
    ///
    /// # Examples
    ///
    /// ```
    /// use zentiment::domain::Sentiment;
    ///
    /// assert_eq!(Sentiment::Positive.label(), "Positive");
    /// ```
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> &'static str {
        r#"{
            "name": "Rustacean Corp",
            "articles": [
                {
                    "title": "Rustacean Corp ships again",
                    "url": "https://news.example.com/rustacean-ships",
                    "text": "The company shipped a new release this week...",
                    "summary": "A new release landed."
                }
            ],
            "mentions": {
                "positive": ["great release", "love the direction", "solid engineering", "impressive pace", "well done"],
                "neutral": ["a release happened"],
                "negative": ["still missing docs", "too many breaking changes"]
            }
        }"#
    }

    #[test]
    fn decodes_wire_shape() {
        let analysis: AnalysisResult = serde_json::from_str(fixture()).unwrap();

        assert_eq!(analysis.name, "Rustacean Corp");
        assert_eq!(analysis.articles.len(), 1);
        assert_eq!(analysis.articles[0].url, "https://news.example.com/rustacean-ships");
        assert_eq!(analysis.mentions.positive.len(), 5);
        assert_eq!(analysis.mentions.neutral.len(), 1);
        assert_eq!(analysis.mentions.negative.len(), 2);
    }

    #[test]
    fn counts_equal_input_sequence_lengths() {
        let analysis: AnalysisResult = serde_json::from_str(fixture()).unwrap();
        let mentions = &analysis.mentions;

        assert_eq!(mentions.count(Sentiment::Positive), mentions.positive.len());
        assert_eq!(mentions.count(Sentiment::Neutral), mentions.neutral.len());
        assert_eq!(mentions.count(Sentiment::Negative), mentions.negative.len());
        assert_eq!(mentions.total(), 8);
    }

    #[test]
    fn empty_payload_decodes_to_zero_counts() {
        let analysis: AnalysisResult = serde_json::from_str(
            r#"{"name": "ghost", "articles": [], "mentions": {"positive": [], "neutral": [], "negative": []}}"#,
        )
        .unwrap();

        assert!(analysis.articles.is_empty());
        assert_eq!(analysis.mentions.total(), 0);
        for sentiment in Sentiment::ALL {
            assert_eq!(analysis.mentions.count(sentiment), 0);
        }
    }

    #[test]
    fn tagged_flattens_in_display_order() {
        let analysis: AnalysisResult = serde_json::from_str(fixture()).unwrap();
        let tagged: Vec<(Sentiment, &str)> = analysis.mentions.tagged().collect();

        assert_eq!(tagged.len(), 8);
        assert_eq!(tagged[0], (Sentiment::Positive, "great release"));
        assert_eq!(tagged[5], (Sentiment::Neutral, "a release happened"));
        assert_eq!(tagged[6], (Sentiment::Negative, "still missing docs"));
    }
}
