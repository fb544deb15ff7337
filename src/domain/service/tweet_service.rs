use crate::domain::interface::*;
use crate::domain::model::*;
use crate::domain::text::extract_hashtags;
use crate::error::*;
use indexmap::IndexMap;
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

/// Sentiment tallies per day, in the order days first appear.
pub fn tweets_by_day(tweets: &[Tweet]) -> Vec<DailyCounts> {
    let mut days: IndexMap<chrono::NaiveDate, Vec<&Tweet>> = IndexMap::new();
    for tweet in tweets {
        days.entry(tweet.date).or_default().push(tweet);
    }

    days.into_iter()
        .map(|(date, rows)| {
            let count = |sentiment| rows.iter().filter(|t| t.sentiment == sentiment).count();
            let unlabeled = count(Sentiment::Unlabeled);
            if unlabeled > 0 {
                warn!(%date, unlabeled, "tweets without a known sentiment label");
            }
            DailySummary {
                date,
                positive: count(Sentiment::Positive),
                neutral: count(Sentiment::Neutral),
                negative: count(Sentiment::Negative),
                total: rows.len(),
                hashtags: extract_hashtags(rows.iter().map(|t| t.hashtags.as_str())),
            }
        })
        .collect()
}

/// Occurrences of each hashtag, most frequent first. Ties keep first-seen
/// order.
pub fn count_hashtags(hashtags: &[Hashtag]) -> Vec<HashtagCount> {
    let mut counts: IndexMap<&Hashtag, usize> = IndexMap::new();
    for hashtag in hashtags {
        *counts.entry(hashtag).or_insert(0) += 1;
    }

    let mut ranking: Vec<HashtagCount> = counts
        .into_iter()
        .map(|(hashtag, count)| HashtagCount {
            hashtag: hashtag.clone(),
            count,
        })
        .collect();
    ranking.sort_by(|a, b| b.count.cmp(&a.count));
    ranking
}

#[derive(Clone)]
pub struct TweetService {
    tweet_repo: Arc<dyn ITweetRepository + Send + Sync>,
}

impl TweetService {
    pub fn new(tweet_repo: Arc<dyn ITweetRepository + Send + Sync>) -> Self {
        Self { tweet_repo }
    }

    pub fn daily_counts(&self, source: &Path) -> Result<Vec<DailyCounts>> {
        let tweets = self.tweet_repo.load_tweets(source)?;
        Ok(tweets_by_day(&tweets))
    }

    pub fn daily_shares(&self, source: &Path) -> Result<Vec<DailyShares>> {
        let counts = self.daily_counts(source)?;
        Ok(counts.iter().map(DailyCounts::normalized).collect())
    }

    pub fn hashtag_ranking(&self, source: &Path) -> Result<Vec<HashtagCount>> {
        let tweets = self.tweet_repo.load_tweets(source)?;
        let hashtags = extract_hashtags(tweets.iter().map(|t| t.hashtags.as_str()));
        Ok(count_hashtags(&hashtags))
    }

    pub fn texts(&self, source: &Path) -> Result<Vec<String>> {
        let tweets = self.tweet_repo.load_tweets(source)?;
        Ok(tweets.into_iter().map(|t| t.text).collect())
    }
}
