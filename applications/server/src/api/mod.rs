/// API route modules
pub mod admin;
pub mod extract;
pub mod health;
pub mod playlists;
pub mod songs;
pub mod users;
