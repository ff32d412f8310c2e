//! Slug-keyed index of the account's channels.

use std::collections::BTreeMap;

use crate::api::types::Channel;
use crate::error::{Error, Result};

/// The "my channels" listing, keyed by slug.
///
/// This snapshot is taken once per run. Ids from the organization listing
/// shown in the menu are not assumed to match it.
#[derive(Debug, Clone, Default)]
pub struct ChannelIndex {
    by_slug: BTreeMap<String, Channel>,
}

impl ChannelIndex {
    pub fn new(channels: Vec<Channel>) -> Self {
        let mut by_slug = BTreeMap::new();
        for channel in channels {
            if channel.slug.is_empty() {
                tracing::debug!("Skipping channel {} without slug", channel.id);
                continue;
            }
            by_slug.insert(channel.slug.clone(), channel);
        }
        Self { by_slug }
    }

    pub fn get(&self, slug: &str) -> Option<&Channel> {
        self.by_slug.get(slug)
    }

    /// Look up a slug, failing with the known slugs in the message.
    pub fn require(&self, slug: &str) -> Result<&Channel> {
        self.get(slug).ok_or_else(|| {
            let known: Vec<&str> = self.by_slug.keys().map(String::as_str).collect();
            Error::ChannelNotFound(format!(
                "'{}' (available: {})",
                slug,
                if known.is_empty() {
                    "none".to_string()
                } else {
                    known.join(", ")
                }
            ))
        })
    }

    pub fn len(&self) -> usize {
        self.by_slug.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_slug.is_empty()
    }

    pub fn channels(&self) -> impl Iterator<Item = &Channel> {
        self.by_slug.values()
    }
}
