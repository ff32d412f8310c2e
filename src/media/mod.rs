//! Media module for catalog nodes, channels and resolved streams.

pub mod channel;
pub mod node;
pub mod parser;
pub mod stream;

pub use channel::ChannelIndex;
pub use node::CollectionNode;
pub use parser::{normalize_entries, normalize_entry};
pub use stream::{CookieGrant, PlaybackCookie, ResolvedStream};
