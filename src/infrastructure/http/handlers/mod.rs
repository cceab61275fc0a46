//! HTTP Handlers

mod ping;
mod storyboard;

pub use ping::*;
pub use storyboard::*;
