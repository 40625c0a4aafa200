use snafu::{ResultExt, Snafu};

use crate::model::VideoRecord;

/// Column names of the CSV, matching the serialized names of [`VideoRecord`].
pub const HEADERS: [&str; 6] = [
    "Title",
    "Published_Date",
    "Views",
    "Likes",
    "Comments",
    "Thumbnail",
];

#[derive(Debug, Snafu)]
pub enum ExportError {
    #[snafu(display("could not write CSV row: {source}"))]
    WriteRow { source: csv::Error },

    #[snafu(display("could not flush CSV output: {source}"))]
    Flush { source: std::io::Error },
}

/// Serializes videos as UTF-8 CSV, one row per video after a header row.
///
/// The header is written even when there are no videos.
pub fn to_csv(videos: &[VideoRecord]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(HEADERS).context(WriteRowSnafu)?;
    for video in videos {
        writer.serialize(video).context(WriteRowSnafu)?;
    }

    writer
        .into_inner()
        .map_err(|error| error.into_error())
        .context(FlushSnafu)
}

/// Download name for a channel's export, e.g. `MrBeast_data.csv`.
///
/// Characters that cannot appear in a quoted header value are replaced by `_`.
pub fn file_name(channel_name: &str) -> String {
    let name: String = channel_name
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | ' ' | '-' | '_' | '.' => c,
            _ => '_',
        })
        .collect();

    format!("{name}_data.csv")
}
