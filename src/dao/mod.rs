/// Music catalog search abstraction.
pub mod catalog;
/// Discord REST client.
pub mod discord;
/// Messaging platform REST abstraction.
pub mod messaging;
/// Spotify search client.
pub mod spotify;
/// Error type shared by outbound clients.
pub mod upstream;
