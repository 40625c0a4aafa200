use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use snafu::ResultExt;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::analysis::{analyze_channel, ChannelReport};
use crate::config::Config;
use crate::error::{ApplicationError, BindAddressSnafu, TemplatesSnafu, WebServerSnafu};
use crate::youtube::{parse_channel_id, Transport, YouTube};

mod channels;
mod dashboard;
mod error;
mod state;
mod templates;

pub use error::*;
pub use state::*;
pub use templates::*;

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

/// `?channel_id=` of the "Analyze Channel" form and the CSV download link.
#[derive(Debug, Deserialize)]
pub struct AnalyzeQuery {
    pub channel_id: Option<String>,
}

pub fn create_router<T>(app: App<T>) -> Router
where
    T: Transport + Clone + 'static,
{
    Router::new()
        .route("/", get(dashboard::show::<T>))
        .route("/export.csv", get(channels::csv::<T>))
        .route("/api/channels/:channel_id", get(channels::report::<T>))
        .layer(TraceLayer::new_for_http())
        .with_state(app)
}

pub async fn serve(config: &Config, youtube: YouTube) -> Result<(), ApplicationError> {
    let app = create_app(youtube, config.default_channel_id.clone()).context(TemplatesSnafu)?;

    let listener = TcpListener::bind(config.host)
        .await
        .context(BindAddressSnafu {
            address: config.host,
        })?;

    tracing::info!("dashboard listening on http://{}", config.host);
    axum::serve(listener, create_router(app))
        .await
        .context(WebServerSnafu)
}

/// Parses the submitted channel and runs the analysis, mapping every outcome other than a
/// report onto an [`ApiError`].
async fn run_analysis<T: Transport>(app: &App<T>, input: &str) -> Result<ChannelReport> {
    let channel_id = parse_channel_id(input).context(InvalidChannelSnafu)?;

    match analyze_channel(app.youtube(), &channel_id).await {
        Ok(Some(report)) => Ok(report),
        Ok(None) => NotFoundSnafu { channel_id }.fail(),
        Err(source) => {
            tracing::error!(error = %source, "could not analyze channel `{}`", channel_id);
            Err(ApiError::Upstream { source })
        }
    }
}
