//! Catalog node representation.

/// A node of a channel's catalog tree.
///
/// Whether a node can be played is decided once, when the raw API entry is
/// normalized: a stream-descriptor link makes it a [`CollectionNode::PlayableItem`],
/// its absence makes it a [`CollectionNode::Collection`] to expand further.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionNode {
    /// A container of further nodes.
    Collection { id: String, name: String },
    /// A node resolvable to a stream.
    PlayableItem {
        id: String,
        name: String,
        stream_link: String,
    },
}

impl CollectionNode {
    pub fn id(&self) -> &str {
        match self {
            CollectionNode::Collection { id, .. } | CollectionNode::PlayableItem { id, .. } => id,
        }
    }

    /// Name shown in menus and used in output filenames.
    pub fn display_name(&self) -> &str {
        match self {
            CollectionNode::Collection { name, .. }
            | CollectionNode::PlayableItem { name, .. } => name,
        }
    }

    /// The stream-descriptor link of a playable item.
    pub fn stream_link(&self) -> Option<&str> {
        match self {
            CollectionNode::PlayableItem { stream_link, .. } => Some(stream_link),
            CollectionNode::Collection { .. } => None,
        }
    }

    pub fn is_playable(&self) -> bool {
        self.stream_link().is_some()
    }
}
