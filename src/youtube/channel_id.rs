use snafu::{ensure, OptionExt as _, Snafu};
use url::Url;

/// Extracts a channel id from user input.
///
/// Accepts either a bare id, returned as-is, or a `youtube.com/channel/<id>` url.
pub fn parse_channel_id(text: &str) -> Result<String, ParseChannelErr> {
    let text = text.trim();
    ensure!(!text.is_empty(), BlankSnafu);

    // if text is not a url, it is the id itself
    let Ok(url) = Url::parse(text) else {
        return Ok(text.to_string());
    };

    let host = url.host_str().unwrap_or_default();
    if !matches!(host, "youtube.com" | "www.youtube.com" | "m.youtube.com") {
        return ExpectChannelUrlSnafu { text }.fail();
    }

    let mut segments = url.path_segments().context(ExpectChannelUrlSnafu { text })?;
    match (segments.next(), segments.next()) {
        (Some("channel"), Some(id)) if !id.is_empty() => Ok(id.to_string()),
        _ => ExpectChannelUrlSnafu { text }.fail(),
    }
}

#[derive(Debug, Snafu, PartialEq)]
pub enum ParseChannelErr {
    /// nothing but whitespace was submitted
    #[snafu(display("Please enter a channel ID."))]
    Blank,

    /// text is a url, but it doesn't point to a youtube channel
    #[snafu(display("`{text}` is not a YouTube channel URL"))]
    ExpectChannelUrl { text: String },
}
