//! Stream descriptor resolution and playback cookie exchange.

use reqwest::header;

use crate::api::client::OzApi;
use crate::api::types::{CookieRequest, DescriptorPayload, StreamDescriptor};
use crate::error::{Error, Result};
use crate::media::{CookieGrant, PlaybackCookie, ResolvedStream};

impl OzApi {
    /// Fetch the descriptor behind a playable item's stream link.
    pub async fn resolve_stream_url(&self, stream_link: &str) -> Result<StreamDescriptor> {
        let payload: DescriptorPayload = self
            .get_data(stream_link, "stream descriptor", Error::Resolution)
            .await?;

        let descriptor = payload
            .into_descriptor()
            .ok_or_else(|| Error::Resolution(format!("No stream behind {}", stream_link)))?;

        if descriptor.cdn_url.is_empty() {
            return Err(Error::Resolution(format!(
                "Empty CDN URL behind {}",
                stream_link
            )));
        }

        Ok(descriptor)
    }

    /// Exchange the descriptor's token for the real playback cookie.
    ///
    /// A failed exchange does not fail the resolution; it is reported as
    /// [`CookieGrant::Unavailable`].
    pub async fn issue_playback_cookie(&self, descriptor: StreamDescriptor) -> ResolvedStream {
        let cookie = match (
            descriptor.cookie_url.as_deref(),
            descriptor.cookie_name.as_deref(),
            descriptor.token.as_deref(),
        ) {
            (Some(url), Some(name), Some(token))
                if !url.is_empty() && !name.is_empty() && !token.is_empty() =>
            {
                match self.request_cookie(url, name, token).await {
                    Ok(cookie) => CookieGrant::Issued(cookie),
                    Err(e) => {
                        tracing::warn!("Playback cookie unavailable: {}", e);
                        CookieGrant::Unavailable(e.to_string())
                    }
                }
            }
            _ => CookieGrant::NotOffered,
        };

        ResolvedStream {
            url: descriptor.cdn_url,
            cookie,
        }
    }

    /// Resolve a stream link into a playable URL and cookie.
    pub async fn resolve(&self, stream_link: &str) -> Result<ResolvedStream> {
        let descriptor = self.resolve_stream_url(stream_link).await?;
        Ok(self.issue_playback_cookie(descriptor).await)
    }

    /// POST `{name, value}` and read back the cookie set under `name`.
    async fn request_cookie(&self, url: &str, name: &str, token: &str) -> Result<PlaybackCookie> {
        tracing::debug!("POST {} (cookie {})", url, name);

        let response = self
            .http()
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&CookieRequest { name, value: token })
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Cookie response status: {}", status);

        if !status.is_success() {
            return Err(Error::Resolution(format!(
                "Cookie endpoint answered HTTP {}",
                status
            )));
        }

        let value = response
            .cookies()
            .find(|cookie| cookie.name() == name)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                Error::Resolution(format!("Cookie endpoint did not set '{}'", name))
            })?;

        Ok(PlaybackCookie {
            name: name.to_string(),
            value,
        })
    }
}
