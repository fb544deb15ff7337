use chrono::{NaiveDate, NaiveDateTime};
use serde::*;
use std::path::PathBuf;

/// Parameters of the periodic tweet collection: one evening window every
/// `step_days`, starting on `start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionPlan {
    pub query: String,
    pub start: NaiveDate,
    pub window_start_hour: u32,
    pub window_end_hour: u32,
    pub step_days: u32,
    pub output_dir: PathBuf,
}

impl Default for CollectionPlan {
    fn default() -> Self {
        CollectionPlan {
            query: "quarentena OR isolamento".to_string(),
            start: NaiveDate::from_ymd_opt(2020, 6, 19).unwrap_or_default(),
            window_start_hour: 19,
            window_end_hour: 21,
            step_days: 7,
            output_dir: PathBuf::from("tweets"),
        }
    }
}

/// One search run of the collector: a time window and the CSV it fills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionWindow {
    pub query: String,
    pub since: NaiveDateTime,
    pub until: NaiveDateTime,
    pub output: PathBuf,
}
