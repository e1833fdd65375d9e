pub mod commands;
pub mod health;
pub mod interaction;
pub mod response;
