//! Channel and collection listings.

use crate::api::client::OzApi;
use crate::api::types::{Channel, DescriptorPayload, RawEntry, StreamDescriptor};
use crate::error::{Error, Result};
use crate::media::{normalize_entries, ChannelIndex, CollectionNode};

impl OzApi {
    /// Channels the logged-in account has access to.
    pub async fn my_channels(&self) -> Result<Vec<Channel>> {
        let url = self.core_url("/users/me/channels");
        self.get_data(&url, "account channels", Error::Catalog).await
    }

    /// Public channels of the configured organization, as offered in the menu.
    pub async fn organization_channels(&self) -> Result<Vec<Channel>> {
        let url = self.core_url("/channels");
        let url = url::Url::parse_with_params(&url, &[("org", self.config().organization.as_str())])?;
        self.get_data(url.as_str(), "organization channels", Error::Catalog)
            .await
    }

    /// The account's channels keyed by slug.
    pub async fn channel_index(&self) -> Result<ChannelIndex> {
        let channels = self.my_channels().await?;
        tracing::debug!("Indexed {} account channels", channels.len());
        Ok(ChannelIndex::new(channels))
    }

    /// Top-level nodes of a channel, or the children of `parent_id`.
    pub async fn list_children(
        &self,
        channel_id: &str,
        parent_id: Option<&str>,
    ) -> Result<Vec<CollectionNode>> {
        let base = self.catalog_url(&format!("/v2/channels/{}/videos_collections", channel_id));
        let url = match parent_id {
            Some(parent) => url::Url::parse_with_params(&base, &[("parentId", parent)])?,
            None => url::Url::parse(&base)?,
        };

        let entries: Vec<RawEntry> = self
            .get_data(url.as_str(), "videos and collections", Error::Catalog)
            .await?;
        normalize_entries(entries)
    }

    /// Contents of a named collection.
    pub async fn collection_detail(
        &self,
        channel_id: &str,
        collection_id: &str,
    ) -> Result<Vec<CollectionNode>> {
        let url = self.core_url(&format!(
            "/channels/{}/collections/{}",
            channel_id, collection_id
        ));

        let entries: Vec<RawEntry> = self
            .get_data(&url, "collection detail", Error::Catalog)
            .await?;
        normalize_entries(entries)
    }

    /// Descriptor of what a channel is broadcasting right now.
    pub async fn now_playing(&self, channel_id: &str) -> Result<StreamDescriptor> {
        let url = self.core_url(&format!(
            "/channels/{}/now?include=streamUrl,video,collection",
            channel_id
        ));

        let payload: DescriptorPayload = self
            .get_data(&url, "live stream", Error::Catalog)
            .await?;
        payload
            .into_descriptor()
            .ok_or_else(|| Error::Catalog(format!("Channel {} is not broadcasting", channel_id)))
    }
}
