//! Output records — one per (application, repository, window) key.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Open-field record handed to the downstream delivery stage.
pub type Data = BTreeMap<String, serde_json::Value>;

/// Summed flow for one application/repository pair in one 5-minute window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OutputRecord {
    #[serde(rename = "applicationID")]
    pub application_id: String,
    #[serde(rename = "repositoryID")]
    pub repository_id: String,
    #[serde(rename = "timeBucket")]
    pub time_bucket: i64,
    pub flow: u64,
}

impl OutputRecord {
    /// Start of the window as a UTC timestamp, if it is in chrono's range.
    pub fn window_start(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time_bucket, 0)
    }

    /// Write the four fields by name into an open-field record.
    pub fn into_data(self) -> Data {
        let mut data = Data::new();
        data.insert("appid".to_string(), self.application_id.into());
        data.insert("repo".to_string(), self.repository_id.into());
        data.insert("time5Min".to_string(), self.time_bucket.into());
        data.insert("flow".to_string(), self.flow.into());
        data
    }
}
