//! Normalization of raw listing entries into catalog nodes.

use serde_json::Value;

use crate::api::types::{RawEntry, RawNode};
use crate::error::{Error, Result};
use crate::media::node::CollectionNode;

/// Normalize a whole listing, failing on the first malformed entry.
pub fn normalize_entries(entries: Vec<RawEntry>) -> Result<Vec<CollectionNode>> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            normalize_entry(entry).map_err(|e| match e {
                Error::Catalog(message) => Error::Catalog(format!("entry {}: {}", index, message)),
                other => other,
            })
        })
        .collect()
}

/// Normalize one `{collection?, video?}` entry, preferring `collection`.
pub fn normalize_entry(entry: RawEntry) -> Result<CollectionNode> {
    let raw = entry
        .collection
        .filter(is_present)
        .or_else(|| entry.video.filter(is_present))
        .ok_or_else(|| Error::Catalog("entry has neither a collection nor a video".into()))?;

    let node: RawNode = serde_json::from_value(raw)
        .map_err(|e| Error::Catalog(format!("malformed node: {}", e)))?;

    Ok(classify(node))
}

/// Turn a raw node into a playable item or a collection.
pub fn classify(node: RawNode) -> CollectionNode {
    let name = pick_display_name(&node);
    let stream_link = node
        .links
        .and_then(|links| links.stream_url)
        .filter(|link| !link.is_empty());

    match stream_link {
        Some(stream_link) => CollectionNode::PlayableItem {
            id: node.id,
            name,
            stream_link,
        },
        None => CollectionNode::Collection { id: node.id, name },
    }
}

/// `name`, else `title`, else the id.
fn pick_display_name(node: &RawNode) -> String {
    [node.name.as_deref(), node.title.as_deref()]
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .unwrap_or(node.id.as_str())
        .to_string()
}

/// Null and empty objects count as absent.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Object(map) => !map.is_empty(),
        _ => true,
    }
}
