/// Column names of the CSV exports written by the tweet collector.
pub mod tweet_columns {
    pub const DATE: &str = "date";
    pub const SENTIMENT: &str = "sentiment";
    pub const HASHTAGS: &str = "hashtags";

    /// Columns a table must carry before tweets can be read from it.
    pub const REQUIRED: [&str; 3] = [DATE, SENTIMENT, HASHTAGS];
}
