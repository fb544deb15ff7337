use chrono::NaiveDate;
use serde::*;

/// Sentiment label attached to a collected tweet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    #[serde(rename = "Positivo")]
    Positive,
    #[serde(rename = "Neutro")]
    Neutral,
    #[serde(rename = "Negativo")]
    Negative,
    /// Any other label, including an empty cell.
    #[serde(other)]
    Unlabeled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tweet {
    pub date: NaiveDate,
    pub sentiment: Sentiment,
    /// Serialized tag list, e.g. `['covid19', 'quarentena']`.
    #[serde(default)]
    pub hashtags: String,
    #[serde(default, rename = "tweet", alias = "text")]
    pub text: String,
}
