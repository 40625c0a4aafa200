use super::*;
use snafu::Snafu;

pub type Result<T, E = YouTubeError> = ::std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum YouTubeError {
    #[snafu(display("cannot build the `{resource}` endpoint url: {source}"))]
    Endpoint {
        resource: Resource,
        source: url::ParseError,
    },

    #[snafu(display("could not reach the YouTube API while fetching `{resource}`: {source}"))]
    Request {
        resource: Resource,
        source: reqwest::Error,
    },

    #[snafu(display("YouTube API rejected the `{resource}` request ({status}): {message}"))]
    Api {
        resource: Resource,
        status: u16,
        message: String,
    },

    #[snafu(display("malformed `{resource}` response: {source}"))]
    MalformedResponse {
        resource: Resource,
        source: serde_json::Error,
    },
}
