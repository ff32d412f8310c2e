//! Seams between the navigator and the API client.

use async_trait::async_trait;

use crate::api::OzApi;
use crate::error::Result;
use crate::media::{CollectionNode, ResolvedStream};

/// Listing operations the navigator walks.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Top-level nodes of a channel, or the children of `parent_id`.
    async fn list_children(
        &self,
        channel_id: &str,
        parent_id: Option<&str>,
    ) -> Result<Vec<CollectionNode>>;

    /// Contents of a named collection.
    async fn collection_detail(
        &self,
        channel_id: &str,
        collection_id: &str,
    ) -> Result<Vec<CollectionNode>>;
}

/// Turns a playable item's stream link into a playable stream.
#[async_trait]
pub trait StreamSource: Send + Sync {
    async fn resolve(&self, stream_link: &str) -> Result<ResolvedStream>;
}

#[async_trait]
impl Catalog for OzApi {
    async fn list_children(
        &self,
        channel_id: &str,
        parent_id: Option<&str>,
    ) -> Result<Vec<CollectionNode>> {
        OzApi::list_children(self, channel_id, parent_id).await
    }

    async fn collection_detail(
        &self,
        channel_id: &str,
        collection_id: &str,
    ) -> Result<Vec<CollectionNode>> {
        OzApi::collection_detail(self, channel_id, collection_id).await
    }
}

#[async_trait]
impl StreamSource for OzApi {
    async fn resolve(&self, stream_link: &str) -> Result<ResolvedStream> {
        OzApi::resolve(self, stream_link).await
    }
}
