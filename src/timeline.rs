use crate::cacher::Store;
use crate::error::Result;
use crate::fetcher::Fetcher;
use crate::filter::{by_month, by_search, FilterMode};
use crate::models::ProjectedEpisode;
use crate::month::{MonthAction, SelectedMonth};
use crate::projector::project;
use chrono::Datelike;

/// Owns the session state: the projected episode list, the selected month and
/// the active search query. All mutation goes through its methods.
pub struct Timeline {
    episodes: Vec<ProjectedEpisode>,
    selected: SelectedMonth,
    search: String,
}

impl Timeline {
    /// Fetch, project, and position the selected month on the first episode.
    pub async fn load<S: Store>(fetcher: &Fetcher<S>) -> Result<Timeline> {
        let (episodes, characters) = fetcher.fetch().await?;
        let episodes = project(&episodes, &characters)?;
        Ok(Self::from_episodes(episodes))
    }

    pub fn from_episodes(episodes: Vec<ProjectedEpisode>) -> Timeline {
        let mut selected = SelectedMonth::default();
        if let Some(first) = episodes.first() {
            // month0 is always below 12.
            selected.apply(MonthAction::Set(first.air_date.month0())).ok();
        }
        Timeline {
            episodes,
            selected,
            search: String::new(),
        }
    }

    pub fn episodes(&self) -> &[ProjectedEpisode] {
        &self.episodes
    }

    pub fn selected_month(&self) -> SelectedMonth {
        self.selected
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn month_action(&mut self, action: MonthAction) -> Result<()> {
        self.selected.apply(action)?;
        Ok(())
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    /// The episodes the current filter state exposes to the renderer: the
    /// search filter when a query is active, the month filter otherwise.
    pub fn visible(&self) -> Vec<ProjectedEpisode> {
        match FilterMode::of(&self.search) {
            FilterMode::Month => by_month(&self.episodes, self.selected.index()),
            FilterMode::Search => by_search(&self.episodes, &self.search),
        }
    }
}
