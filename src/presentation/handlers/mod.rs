mod auth;
mod ping;
mod upload;

pub use auth::{login_handler, register_handler};
pub use ping::ping_handler;
pub use upload::upload_handler;
