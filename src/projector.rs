use crate::error::Result;
use crate::models::{ProjectedEpisode, RawCharacter, RawEpisode};
use crate::month::ABBREVIATED_MONTHS;
use chrono::{Datelike, NaiveDate};
use rayon::prelude::*;

// The API writes air dates like "December 2, 2013".
const AIR_DATE_FORMAT: &str = "%B %d, %Y";

/// Join episodes against the character list into display-ready projections.
/// Order is preserved from the input episode list; an unparseable air date
/// fails the whole projection.
pub fn project(
    episodes: &[RawEpisode],
    characters: &[RawCharacter],
) -> Result<Vec<ProjectedEpisode>> {
    episodes
        .par_iter()
        .map(|episode| project_one(episode, characters))
        .collect()
}

fn project_one(episode: &RawEpisode, characters: &[RawCharacter]) -> Result<ProjectedEpisode> {
    let air_date = NaiveDate::parse_from_str(&episode.air_date, AIR_DATE_FORMAT)?;
    Ok(ProjectedEpisode {
        id: episode.id,
        episode_name: episode.name.clone(),
        episode_code: episode.episode.clone(),
        air_date,
        day: air_date.day(),
        month: ABBREVIATED_MONTHS[air_date.month0() as usize],
        year: air_date.year(),
        characters: resolve_characters(episode, characters),
    })
}

/// Name resolution follows the episode's URL list order; URLs with no matching
/// character record are dropped.
fn resolve_characters(episode: &RawEpisode, characters: &[RawCharacter]) -> Vec<String> {
    episode
        .characters
        .iter()
        .filter_map(|url| {
            let found = characters.iter().find(|character| &character.url == url);
            if found.is_none() {
                tracing::debug!("no character record for {}", url);
            }
            found.map(|character| character.name.clone())
        })
        .collect()
}
