use crate::cacher::{Store, CHARACTERS_KEY, EPISODES_KEY};
use crate::error::Result;
use crate::models::{Page, RawCharacter, RawEpisode};
use crate::requester::Requester;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Resolves raw episode and character data from the cache when both entries
/// are present, falling back to the network otherwise.
pub struct Fetcher<S: Store> {
	requester: Requester,
	store: S,
}

impl<S: Store> Fetcher<S> {
	pub fn new(requester: Requester, store: S) -> Self {
		Fetcher { requester, store }
	}

	/// Produce both raw collections. Either both come from the cache or both
	/// come from the network; there is no partial-success path.
	pub async fn fetch(&self) -> Result<(Vec<RawEpisode>, Vec<RawCharacter>)> {
		if let Some(cached) = self.from_cache() {
			tracing::debug!("cache hit for both collections");
			return Ok(cached);
		}
		tracing::info!("fetching episodes and characters");
		let (episodes, characters) = futures::try_join!(
			self.requester.get_episodes(),
			self.requester.get_characters()
		)?;
		self.persist(&episodes, &characters);
		Ok((episodes, characters))
	}

	fn from_cache(&self) -> Option<(Vec<RawEpisode>, Vec<RawCharacter>)> {
		let episodes = self.store.get(EPISODES_KEY)?;
		let characters = self.store.get(CHARACTERS_KEY)?;
		let episodes = parse_cached::<RawEpisode>(EPISODES_KEY, &episodes)?;
		let characters = parse_cached::<RawCharacter>(CHARACTERS_KEY, &characters)?;
		Some((episodes, characters))
	}

	fn persist(&self, episodes: &[RawEpisode], characters: &[RawCharacter]) {
		self.write_entry(EPISODES_KEY, &Page::complete(episodes.to_vec()));
		self.write_entry(CHARACTERS_KEY, &Page::complete(characters.to_vec()));
	}

	// Cache writes are best-effort; a failure never fails the session.
	fn write_entry<T: Serialize>(&self, key: &str, page: &Page<T>) {
		let value = match serde_json::to_string(page) {
			Ok(value) => value,
			Err(err) => {
				tracing::warn!("could not serialize {}: {}", key, err);
				return;
			}
		};
		if let Err(err) = self.store.set(key, &value) {
			tracing::warn!("could not cache {}: {}", key, err);
		}
	}
}

/// A present-but-unparseable entry counts as a miss; the caller refetches.
fn parse_cached<T: DeserializeOwned>(key: &str, text: &str) -> Option<Vec<T>> {
	match serde_json::from_str::<Page<T>>(text) {
		Ok(page) => Some(page.results),
		Err(err) => {
			tracing::warn!("discarding cached {}: {}", key, err);
			None
		}
	}
}
