//! The channel -> collection -> ... -> item walk.

use crate::api::types::Channel;
use crate::error::{Error, Result};
use crate::fs::sanitize_component;
use crate::media::{CollectionNode, ResolvedStream};
use crate::navigate::chooser::Chooser;
use crate::navigate::source::{Catalog, StreamSource};

/// Where the walk begins inside a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartPoint {
    /// The channel's top-level videos and collections.
    TopLevel,
    /// The contents of a known collection.
    Collection(String),
}

/// A successful walk.
#[derive(Debug, Clone)]
pub struct Navigation {
    /// Output filename stem, without extension.
    pub filename: String,
    /// Nodes chosen along the way, the playable item last.
    pub path: Vec<CollectionNode>,
    pub stream: ResolvedStream,
}

impl Navigation {
    pub fn leaf(&self) -> Option<&CollectionNode> {
        self.path.last()
    }
}

/// Walks a channel's catalog until the user lands on a playable item.
pub struct Navigator<'a, C, S, P> {
    catalog: &'a C,
    streams: &'a S,
    chooser: &'a mut P,
    max_depth: usize,
}

impl<'a, C, S, P> Navigator<'a, C, S, P>
where
    C: Catalog,
    S: StreamSource,
    P: Chooser,
{
    pub fn new(catalog: &'a C, streams: &'a S, chooser: &'a mut P, max_depth: usize) -> Self {
        Self {
            catalog,
            streams,
            chooser,
            max_depth,
        }
    }

    /// Let the user pick one of `channels`.
    pub async fn choose_channel(&mut self, channels: Vec<Channel>) -> Result<Channel> {
        if channels.is_empty() {
            return Err(Error::ExhaustedChoices("channels".into()));
        }

        let labels: Vec<String> = channels
            .iter()
            .map(|c| c.display_name().to_string())
            .collect();
        let index = self.chooser.choose("Channels", &labels).await?;

        channels
            .into_iter()
            .nth(index)
            .ok_or_else(|| Error::InvalidSelection(format!("no channel at index {}", index)))
    }

    /// Walk `channel_id` from `start` down to a playable item and resolve it.
    ///
    /// Each collection reached costs one expansion; more than `max_depth`
    /// expansions fails with [`Error::DepthExceeded`]. A playable item whose
    /// descriptor cannot be resolved is expanded like a collection.
    pub async fn navigate(&mut self, channel_id: &str, start: StartPoint) -> Result<Navigation> {
        let (heading, root) = match &start {
            StartPoint::TopLevel => (
                "Collections".to_string(),
                self.catalog.list_children(channel_id, None).await?,
            ),
            StartPoint::Collection(collection_id) => (
                format!("Collection {}", collection_id),
                self.catalog
                    .collection_detail(channel_id, collection_id)
                    .await?,
            ),
        };

        let mut node = self.pick(&heading, root).await?;
        let mut path = vec![node.clone()];
        let mut expansions = 0;

        loop {
            if let Some(link) = node.stream_link() {
                tracing::info!("Resolving stream for {} ({})", node.display_name(), node.id());
                match self.streams.resolve(link).await {
                    Ok(stream) => {
                        let filename = compose_filename(&path, &start);
                        return Ok(Navigation {
                            filename,
                            path,
                            stream,
                        });
                    }
                    // No usable descriptor: treat the node as a branch.
                    Err(Error::Resolution(reason)) => {
                        tracing::warn!(
                            "No stream for {} ({}): {}, expanding it instead",
                            node.display_name(),
                            node.id(),
                            reason
                        );
                    }
                    Err(e) => return Err(e),
                }
            }

            if expansions >= self.max_depth {
                return Err(Error::DepthExceeded(self.max_depth));
            }
            expansions += 1;

            tracing::debug!("Expanding {} ({})", node.display_name(), node.id());
            let children = self
                .catalog
                .list_children(channel_id, Some(node.id()))
                .await?;

            node = self.pick(node.display_name(), children).await?;
            path.push(node.clone());
        }
    }

    async fn pick(&mut self, heading: &str, nodes: Vec<CollectionNode>) -> Result<CollectionNode> {
        if nodes.is_empty() {
            return Err(Error::ExhaustedChoices(heading.to_string()));
        }

        let labels: Vec<String> = nodes
            .iter()
            .map(|n| n.display_name().to_string())
            .collect();
        let index = self.chooser.choose(heading, &labels).await?;

        nodes
            .into_iter()
            .nth(index)
            .ok_or_else(|| Error::InvalidSelection(format!("no entry at index {} in '{}'", index, heading)))
    }
}

/// Filename stem for a walk: the display name of every chosen node, then the
/// playable item's id, joined with `_`.
///
/// When the walk started at the channel's top level and went deeper, the
/// top-level collection is left out.
pub fn compose_filename(path: &[CollectionNode], start: &StartPoint) -> String {
    let skip = match start {
        StartPoint::TopLevel if path.len() > 1 => 1,
        _ => 0,
    };

    let mut tokens: Vec<String> = path
        .iter()
        .skip(skip)
        .map(|node| sanitize_component(node.display_name()))
        .collect();

    if let Some(leaf) = path.last() {
        tokens.push(sanitize_component(leaf.id()));
    }

    tokens.join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(id: &str, name: &str) -> CollectionNode {
        CollectionNode::Collection {
            id: id.into(),
            name: name.into(),
        }
    }

    fn item(id: &str, name: &str) -> CollectionNode {
        CollectionNode::PlayableItem {
            id: id.into(),
            name: name.into(),
            stream_link: format!("https://x/{}", id),
        }
    }

    #[test]
    fn test_filename_skips_top_level_collection() {
        let path = vec![
            collection("10", "Live"),
            collection("20", "Football"),
            item("99", "Final"),
        ];
        assert_eq!(
            compose_filename(&path, &StartPoint::TopLevel),
            "Football_Final_99"
        );
    }

    #[test]
    fn test_filename_keeps_first_node_for_collection_start() {
        let path = vec![collection("20", "Football"), item("99", "Final")];
        assert_eq!(
            compose_filename(&path, &StartPoint::Collection("10".into())),
            "Football_Final_99"
        );
    }

    #[test]
    fn test_filename_for_top_level_leaf() {
        let path = vec![item("7", "News")];
        assert_eq!(compose_filename(&path, &StartPoint::TopLevel), "News_7");
    }

    #[test]
    fn test_filename_sanitizes_names() {
        let path = vec![
            collection("1", "Root"),
            collection("2", "A/B: C"),
            item("3", "D?"),
        ];
        assert_eq!(compose_filename(&path, &StartPoint::TopLevel), "A_B_ C_D__3");
    }
}
