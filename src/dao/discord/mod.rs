mod client;
mod config;
mod error;

pub use client::DiscordClient;
pub use config::DiscordConfig;
pub use error::{DiscordError, DiscordResult};
