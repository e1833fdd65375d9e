mod client;
mod config;
mod error;
mod models;

pub use client::SpotifyClient;
pub use config::SpotifyConfig;
pub use error::{SpotifyError, SpotifyResult};
