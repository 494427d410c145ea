use crate::models::ProjectedEpisode;
use chrono::Datelike;

/// Which of the two filters applies for a given search query. The filters are
/// mutually exclusive; an empty query means the month view is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterMode {
    Month,
    Search,
}

impl FilterMode {
    pub fn of(query: &str) -> FilterMode {
        if query.is_empty() {
            return FilterMode::Month;
        }
        FilterMode::Search
    }
}

/// Keep episodes airing in the given zero-indexed month. Order preserved.
pub fn by_month(episodes: &[ProjectedEpisode], month: u32) -> Vec<ProjectedEpisode> {
    episodes
        .iter()
        .filter(|episode| episode.air_date.month0() == month)
        .cloned()
        .collect()
}

/// Keep episodes whose code or name contains the query, case-insensitively.
/// Order preserved.
pub fn by_search(episodes: &[ProjectedEpisode], query: &str) -> Vec<ProjectedEpisode> {
    let query = query.to_lowercase();
    episodes
        .iter()
        .filter(|episode| {
            episode.episode_code.to_lowercase().contains(&query)
                || episode.episode_name.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}
