use super::*;

/// Statistics snapshot of a single upload.
///
/// The serialized names double as the CSV header, so they keep the column names of the dashboard table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct VideoRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Published_Date")]
    pub published_at: NaiveDate,
    #[serde(rename = "Views")]
    pub views: u64,
    #[serde(rename = "Likes")]
    pub likes: u64,
    #[serde(rename = "Comments")]
    pub comments: u64,
    #[serde(rename = "Thumbnail")]
    pub thumbnail_url: String,
}
