//! Playback module: hands the resolved stream to streamlink.

pub mod command;
pub mod dispatch;

pub use command::{hls_url, PlayerCommand};
pub use dispatch::run_player;
