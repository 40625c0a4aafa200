use super::*;

/// Headline statistics of a channel at the time it was looked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct ChannelSummary {
    pub channel_name: String,
    pub subscriber_count: u64,
    pub view_count: u64,
    pub video_count: u64,
    /// Auto-maintained playlist holding every public upload, newest first.
    pub uploads_playlist_id: String,
    pub thumbnail_url: String,
}
