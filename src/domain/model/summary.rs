use super::Hashtag;
use chrono::NaiveDate;
use serde::*;

/// Sentiment tally of one day. `T` is `usize` for raw counts and `f64` once
/// the counts are divided by the day's total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary<T> {
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "positivos")]
    pub positive: T,
    #[serde(rename = "neutros")]
    pub neutral: T,
    #[serde(rename = "negativos")]
    pub negative: T,
    pub total: usize,
    pub hashtags: Vec<Hashtag>,
}

pub type DailyCounts = DailySummary<usize>;
pub type DailyShares = DailySummary<f64>;

impl DailyCounts {
    pub fn normalized(&self) -> DailyShares {
        // a day only exists once it has a row, so total > 0
        let total = self.total as f64;
        DailySummary {
            date: self.date,
            positive: self.positive as f64 / total,
            neutral: self.neutral as f64 / total,
            negative: self.negative as f64 / total,
            total: self.total,
            hashtags: self.hashtags.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashtagCount {
    pub hashtag: Hashtag,
    #[serde(rename = "quantidade")]
    pub count: usize,
}
