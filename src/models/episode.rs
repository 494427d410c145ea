use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An episode record exactly as the API returns it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawEpisode {
    pub id: i64,
    pub name: String,
    pub episode: String,
    pub air_date: String,
    pub characters: Vec<String>,
}

/// A display-ready episode, built by joining a [`RawEpisode`] against the
/// character list. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedEpisode {
    pub id: i64,
    pub episode_name: String,
    pub episode_code: String,
    pub air_date: NaiveDate,
    pub day: u32,
    pub month: &'static str,
    pub year: i32,
    pub characters: Vec<String>,
}
