use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::model::{ChannelSummary, VideoRecord};
use crate::youtube::{Result, Transport, YouTube};

/// Everything the dashboard shows for one channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct ChannelReport {
    pub summary: ChannelSummary,
    /// Most recent uploads in API response order, at most [`crate::youtube::PAGE_SIZE`].
    pub videos: Vec<VideoRecord>,
}

/// Runs the channel, playlist and video lookups one after another.
///
/// Returns `Ok(None)` as soon as the channel lookup comes back empty, without touching the
/// other endpoints. Any API failure is returned as-is.
#[instrument(skip(youtube))]
pub async fn analyze_channel<T: Transport>(
    youtube: &YouTube<T>, channel_id: &str,
) -> Result<Option<ChannelReport>> {
    let Some(summary) = youtube.channel_summary(channel_id).await? else {
        tracing::info!("channel `{}` not found", channel_id);
        return Ok(None);
    };

    let video_ids = youtube
        .uploaded_video_ids(&summary.uploads_playlist_id)
        .await?;
    let videos = youtube.video_details(&video_ids).await?;

    tracing::info!(
        videos = videos.len(),
        "analyzed channel `{}` ({})",
        summary.channel_name,
        channel_id
    );

    Ok(Some(ChannelReport::new(summary, videos)))
}
