//! API response type definitions.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Generic `{ "data": ... }` response wrapper used by every OZ endpoint.
#[derive(Debug, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// OAuth token endpoint response.
///
/// Both fields are optional so that a rejected login (which answers with an
/// error object instead) can be reported as bad credentials.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    /// Token lifetime in milliseconds.
    pub expires_in: Option<f64>,
}

/// A channel as returned by either channel listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Channel {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Channel {
    /// Name shown in menus.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ if !self.slug.is_empty() => &self.slug,
            _ => &self.id,
        }
    }
}

/// One entry of a videos/collections listing.
///
/// The API wraps each node under either `collection` or `video`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEntry {
    #[serde(default)]
    pub collection: Option<Value>,
    #[serde(default)]
    pub video: Option<Value>,
}

/// A catalog node before classification.
#[derive(Debug, Clone, Deserialize)]
pub struct RawNode {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "_links", default)]
    pub links: Option<NodeLinks>,
}

/// Hypermedia links attached to a node.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeLinks {
    #[serde(rename = "streamUrl", default)]
    pub stream_url: Option<String>,
}

/// Stream descriptor naming the CDN URL and the raw cookie token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamDescriptor {
    pub cdn_url: String,
    #[serde(default)]
    pub cookie_name: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub cookie_url: Option<String>,
}

/// `{ "streamUrl": { ... } }` wrapper around a descriptor.
#[derive(Debug, Deserialize)]
pub struct StreamUrlEnvelope {
    #[serde(rename = "streamUrl")]
    pub stream_url: StreamDescriptor,
}

/// The shapes the descriptor endpoints use for their `data` member.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DescriptorPayload {
    List(Vec<StreamUrlEnvelope>),
    Wrapped(StreamUrlEnvelope),
    Bare(StreamDescriptor),
}

impl DescriptorPayload {
    /// The first descriptor carried by the payload, if any.
    pub fn into_descriptor(self) -> Option<StreamDescriptor> {
        match self {
            DescriptorPayload::List(list) => list.into_iter().next().map(|e| e.stream_url),
            DescriptorPayload::Wrapped(envelope) => Some(envelope.stream_url),
            DescriptorPayload::Bare(descriptor) => Some(descriptor),
        }
    }
}

/// Cookie issuance request body.
#[derive(Debug, serde::Serialize)]
pub struct CookieRequest<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

/// Accept ids encoded as JSON strings or numbers.
pub fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_numeric_id() {
        let channel: Channel =
            serde_json::from_str(r#"{"id": 1, "slug": "sport", "name": "Sport"}"#).unwrap();
        assert_eq!(channel.id, "1");
        assert_eq!(channel.display_name(), "Sport");
    }

    #[test]
    fn test_channel_display_name_fallback() {
        let channel: Channel = serde_json::from_str(r#"{"id": "abc", "slug": "ruv"}"#).unwrap();
        assert_eq!(channel.display_name(), "ruv");
    }

    #[test]
    fn test_descriptor_list_shape() {
        let body = r#"{"data":[{"streamUrl":{"cdnUrl":"u","cookieName":"c","token":"t"}}]}"#;
        let response: DataResponse<DescriptorPayload> = serde_json::from_str(body).unwrap();
        let descriptor = response.data.into_descriptor().unwrap();
        assert_eq!(descriptor.cdn_url, "u");
        assert_eq!(descriptor.cookie_name.as_deref(), Some("c"));
        assert_eq!(descriptor.token.as_deref(), Some("t"));
        assert!(descriptor.cookie_url.is_none());
    }

    #[test]
    fn test_descriptor_bare_shape() {
        let body = r#"{"data":{"cdnUrl":"cdn.oz.com/live.m3u8","cookieName":"oz","token":"x"}}"#;
        let response: DataResponse<DescriptorPayload> = serde_json::from_str(body).unwrap();
        let descriptor = response.data.into_descriptor().unwrap();
        assert_eq!(descriptor.cdn_url, "cdn.oz.com/live.m3u8");
    }

    #[test]
    fn test_descriptor_empty_list() {
        let response: DataResponse<DescriptorPayload> =
            serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert!(response.data.into_descriptor().is_none());
    }

    #[test]
    fn test_token_response_without_token() {
        let response: TokenResponse =
            serde_json::from_str(r#"{"error":"invalid_grant"}"#).unwrap();
        assert!(response.access_token.is_none());
        assert!(response.expires_in.is_none());
    }
}
