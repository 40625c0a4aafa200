use std::fmt;
use std::future::Future;

use derive_new::new;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use snafu::ResultExt;
use tracing::instrument;
use url::Url;

use crate::error::{ApiBaseSnafu, ApplicationError, HttpClientSnafu};
use crate::model::{ChannelSummary, VideoRecord};

pub use channel_id::*;
pub use error::*;
use resources::{ChannelListResponse, PlaylistItemListResponse, VideoListResponse};

mod channel_id;
mod error;
pub mod resources;

#[cfg(test)]
pub(crate) mod fake;

pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com/youtube/v3/";

/// Uploads considered per analysis. The playlist is fetched as a single page of this size.
pub const PAGE_SIZE: usize = 50;

pub fn connect(config: &YouTubeConfig) -> Result<YouTube, ApplicationError> {
    let mut base = Url::parse(&config.api_base).context(ApiBaseSnafu {
        base: config.api_base.clone(),
    })?;

    // endpoints are joined onto the base, so it has to look like a directory
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    let client = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context(HttpClientSnafu)?;

    let transport = HttpTransport::new(client, base, config.api_key.clone());
    Ok(YouTube::new(transport))
}

#[derive(Debug, Clone, Deserialize)]
pub struct YouTubeConfig {
    #[serde(rename = "youtube_api_key")]
    pub api_key: String,
    #[serde(rename = "youtube_api_base", default = "default_api_base")]
    pub api_base: String,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

/// The list endpoints of the Data API that the dashboard reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Channels,
    PlaylistItems,
    Videos,
}

impl Resource {
    pub fn path(self) -> &'static str {
        match self {
            Resource::Channels => "channels",
            Resource::PlaylistItems => "playlistItems",
            Resource::Videos => "videos",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// One authenticated JSON GET against the Data API.
///
/// Implementations return the raw body of a successful response and report anything else
/// (unreachable host, non-success status) as a [`YouTubeError`].
pub trait Transport: Send + Sync {
    fn get(
        &self, resource: Resource, query: &[(&str, &str)],
    ) -> impl Future<Output = Result<String>> + Send;
}

/// [`Transport`] backed by `reqwest`, sending the API key as the `key` query parameter on every call.
#[derive(Clone, new)]
pub struct HttpTransport {
    client: reqwest::Client,
    base: Url,
    api_key: String,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base", &self.base.as_str())
            .finish_non_exhaustive()
    }
}

impl Transport for HttpTransport {
    async fn get(&self, resource: Resource, query: &[(&str, &str)]) -> Result<String> {
        let url = self
            .base
            .join(resource.path())
            .context(EndpointSnafu { resource })?;

        let response = self
            .client
            .get(url)
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .context(RequestSnafu { resource })?;

        let status = response.status();
        let body = response.text().await.context(RequestSnafu { resource })?;

        if !status.is_success() {
            return ApiSnafu {
                resource,
                status: status.as_u16(),
                message: resources::error_message(&body),
            }
            .fail();
        }

        Ok(body)
    }
}

/// Read-only client for the channel, playlist and video endpoints.
#[derive(Debug, Clone, new)]
pub struct YouTube<T = HttpTransport> {
    transport: T,
}

impl<T: Transport> YouTube<T> {
    /// Looks up a channel by id. `None` means the API knows no channel with that id.
    #[instrument(skip(self))]
    pub async fn channel_summary(&self, channel_id: &str) -> Result<Option<ChannelSummary>> {
        tracing::info!("fetch channel `{}`", channel_id);
        let query = [
            ("part", "snippet,contentDetails,statistics"),
            ("id", channel_id),
        ];

        let response: ChannelListResponse = self.fetch(Resource::Channels, &query).await?;
        Ok(response.items.into_iter().next().map(ChannelSummary::from))
    }

    /// Ids of the first page of a playlist, in the order the API lists them.
    #[instrument(skip(self))]
    pub async fn uploaded_video_ids(&self, playlist_id: &str) -> Result<Vec<String>> {
        tracing::info!("fetch playlist `{}`", playlist_id);
        let max_results = PAGE_SIZE.to_string();
        let query = [
            ("part", "snippet"),
            ("playlistId", playlist_id),
            ("maxResults", max_results.as_str()),
        ];

        let response: PlaylistItemListResponse =
            self.fetch(Resource::PlaylistItems, &query).await?;

        let video_ids = response
            .items
            .into_iter()
            .take(PAGE_SIZE)
            .map(|item| item.snippet.resource_id.video_id)
            .collect();

        Ok(video_ids)
    }

    /// Statistics for a batch of videos in a single request.
    ///
    /// The result follows the order of the API response, which is not guaranteed to match `video_ids`.
    #[instrument(skip(self, video_ids), fields(count = video_ids.len()))]
    pub async fn video_details(&self, video_ids: &[String]) -> Result<Vec<VideoRecord>> {
        // an empty id filter is rejected by the API
        if video_ids.is_empty() {
            return Ok(Vec::new());
        }

        tracing::info!("fetch {} videos", video_ids.len());
        let ids = video_ids.join(",");
        let query = [("part", "snippet,statistics"), ("id", ids.as_str())];

        let response: VideoListResponse = self.fetch(Resource::Videos, &query).await?;
        Ok(response.items.into_iter().map(VideoRecord::from).collect())
    }

    async fn fetch<R: DeserializeOwned>(
        &self, resource: Resource, query: &[(&str, &str)],
    ) -> Result<R> {
        let body = self.transport.get(resource, query).await?;
        serde_json::from_str(&body).context(MalformedResponseSnafu { resource })
    }
}
