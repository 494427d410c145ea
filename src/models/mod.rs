pub mod character;
pub mod episode;
pub mod page;

pub use character::RawCharacter;
pub use episode::{ProjectedEpisode, RawEpisode};
pub use page::{Page, PageInfo};
