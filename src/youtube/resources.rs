//! Wire types for the three YouTube Data API v3 list endpoints the dashboard reads.
//!
//! Only the fields the dashboard needs are modelled. Statistics arrive as decimal strings and
//! are absent when the owner hides them, so every count goes through [`count`] and defaults to 0.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::model::{ChannelSummary, VideoRecord};

/// Response of `channels.list`.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels/list>
#[derive(Debug, Deserialize)]
pub struct ChannelListResponse {
    /// The API leaves this out entirely when nothing matched.
    #[serde(default)]
    pub items: Vec<Channel>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub snippet: ChannelSnippet,
    pub content_details: ChannelContentDetails,
    #[serde(default)]
    pub statistics: ChannelStatistics,
}

#[derive(Debug, Deserialize)]
pub struct ChannelSnippet {
    pub title: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelContentDetails {
    pub related_playlists: RelatedPlaylists,
}

#[derive(Debug, Deserialize)]
pub struct RelatedPlaylists {
    pub uploads: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    #[serde(default, deserialize_with = "count")]
    pub view_count: u64,
    /// Absent when `hiddenSubscriberCount` is set.
    #[serde(default, deserialize_with = "count")]
    pub subscriber_count: u64,
    #[serde(default, deserialize_with = "count")]
    pub video_count: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

impl From<Channel> for ChannelSummary {
    fn from(channel: Channel) -> Self {
        ChannelSummary {
            channel_name: channel.snippet.title,
            subscriber_count: channel.statistics.subscriber_count,
            view_count: channel.statistics.view_count,
            video_count: channel.statistics.video_count,
            uploads_playlist_id: channel.content_details.related_playlists.uploads,
            thumbnail_url: thumbnail_url(channel.snippet.thumbnails.high),
        }
    }
}

/// Response of `playlistItems.list`.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlistItems/list>
#[derive(Debug, Deserialize)]
pub struct PlaylistItemListResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItem {
    pub snippet: PlaylistItemSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemSnippet {
    pub resource_id: ResourceId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    pub video_id: String,
}

/// Response of `videos.list`.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos/list>
#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<Video>,
}

#[derive(Debug, Deserialize)]
pub struct Video {
    pub snippet: VideoSnippet,
    #[serde(default)]
    pub statistics: VideoStatistics,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    pub title: String,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    #[serde(default, deserialize_with = "count")]
    pub view_count: u64,
    /// Absent when the owner hides the like count.
    #[serde(default, deserialize_with = "count")]
    pub like_count: u64,
    /// Absent when comments are disabled.
    #[serde(default, deserialize_with = "count")]
    pub comment_count: u64,
}

impl From<Video> for VideoRecord {
    fn from(video: Video) -> Self {
        VideoRecord {
            title: video.snippet.title,
            published_at: video.snippet.published_at.date_naive(),
            views: video.statistics.view_count,
            likes: video.statistics.like_count,
            comments: video.statistics.comment_count,
            thumbnail_url: thumbnail_url(video.snippet.thumbnails.default),
        }
    }
}

/// Body the API sends alongside a non-success status.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Pulls the human readable message out of an API error body, falling back to the raw body.
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(response) => response.error.message,
        Err(_) => body.trim().to_string(),
    }
}

fn thumbnail_url(thumbnail: Option<Thumbnail>) -> String {
    thumbnail.map(|thumbnail| thumbnail.url).unwrap_or_default()
}

/// Accepts a count encoded either as a decimal string or as a number; `null` counts as 0.
fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Text(String),
        Number(u64),
    }

    match Option::<Count>::deserialize(deserializer)? {
        None => Ok(0),
        Some(Count::Number(number)) => Ok(number),
        Some(Count::Text(text)) => text.parse().map_err(serde::de::Error::custom),
    }
}
