pub mod client;
pub mod error;
pub mod types;

pub use client::RickAndMortyClient;
pub use error::{ClientError, Result};
pub use types::{CharacterSummary, EpisodeSummary};
