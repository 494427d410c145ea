use crate::error::{GenericError, Result};
use crate::models::{Page, RawCharacter, RawEpisode};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

lazy_static! {
	static ref API_BASE_REGEX: regex::Regex =
		regex::Regex::new(r#"^((https)|(http))(://).+"#).unwrap();
}

/// HTTP layer over the episode/character API.
pub struct Requester {
	net: Client,
	base: String,
}

impl Requester {
	pub fn new(base: impl Into<String>) -> Result<Requester> {
		let mut base = base.into();
		while base.ends_with('/') {
			base.pop();
		}
		Self::verify_base(&base)?;
		Ok(Requester {
			net: Client::new(),
			base,
		})
	}

	fn verify_base(base: &str) -> Result<()> {
		if !API_BASE_REGEX.is_match(base) {
			return Err("Unrecognized API base URL.".into());
		}
		Ok(())
	}

	pub async fn get_episodes(&self) -> Result<Vec<RawEpisode>> {
		self.get_collection(format!("{}/episode/", self.base)).await
	}

	pub async fn get_characters(&self) -> Result<Vec<RawCharacter>> {
		self.get_collection(format!("{}/character/", self.base)).await
	}

	async fn get_page<T: DeserializeOwned>(&self, url: &str) -> Result<Page<T>> {
		let response = self.net.get(url).send().await?;
		let status = response.status();
		if status != StatusCode::OK {
			return Err(
				GenericError(format!("Status code was not 200 OK.\nCode: {}", status)).into(),
			);
		}
		let text = response.text().await?;
		let page = serde_json::from_str::<Page<T>>(&text)?;
		Ok(page)
	}

	/// Walk a paginated collection to the end, concatenating results in page
	/// order. A response without a next link terminates the walk.
	#[async_recursion::async_recursion]
	async fn get_collection<T: DeserializeOwned + Send>(&self, url: String) -> Result<Vec<T>> {
		tracing::debug!("requesting {}", url);
		let page = self.get_page::<T>(&url).await?;
		let mut results = page.results;
		if let Some(next) = page.info.and_then(|info| info.next) {
			results.extend(self.get_collection(next).await?);
		}
		Ok(results)
	}
}
