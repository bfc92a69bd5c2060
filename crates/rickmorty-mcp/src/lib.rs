pub mod config;
pub mod service;

pub use config::Config;
pub use service::RickMortyService;
