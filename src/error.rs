use std::net::SocketAddr;
use std::path::PathBuf;

use snafu::{Location, Snafu};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ApplicationError {
    /// could not read the configuration from the environment
    ConfigLoad {
        source: envy::Error,
        #[snafu(implicit)]
        location: Location,
    },

    /// The YouTube API base url is not a valid url
    ApiBase {
        base: String,
        source: url::ParseError,
        #[snafu(implicit)]
        location: Location,
    },

    /// Could not build the HTTP client used to reach the YouTube API
    HttpClient {
        source: reqwest::Error,
        #[snafu(implicit)]
        location: Location,
    },

    /// Could not compile the dashboard templates
    Templates {
        source: tera::Error,
        #[snafu(implicit)]
        location: Location,
    },

    /// Could not serve the application
    WebServer {
        source: std::io::Error,
        #[snafu(implicit)]
        location: Location,
    },

    /// Could not bind to the given address, check if it's already in use
    BindAddress {
        address: SocketAddr,
        source: std::io::Error,
        #[snafu(implicit)]
        location: Location,
    },

    /// Could not open the log file in the configured directory
    LogFile {
        directory: PathBuf,
        source: tracing_appender::rolling::InitError,
        #[snafu(implicit)]
        location: Location,
    },

    /// Could not initialize the logger
    InitializeLogger {
        source: tracing::subscriber::SetGlobalDefaultError,
        #[snafu(implicit)]
        location: Location,
    },
}
