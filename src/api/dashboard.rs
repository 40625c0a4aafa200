use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum_template::RenderHtml;
use serde::Serialize;
use tracing::instrument;

use super::{run_analysis, AnalyzeQuery, ApiError, App, DASHBOARD};
use crate::analysis::ChannelReport;
use crate::chart::Charts;
use crate::export;
use crate::youtube::Transport;

pub const NO_VIDEOS: &str = "No videos found in this channel's upload list.";

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Error,
    Warning,
}

#[derive(Debug, Serialize)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct DashboardView {
    /// Value of the channel input box.
    pub channel_id: String,
    pub notice: Option<Notice>,
    pub report: Option<ChannelReport>,
    pub charts: Option<Charts>,
    pub csv_file_name: Option<String>,
}

impl DashboardView {
    fn idle(channel_id: String) -> Self {
        DashboardView {
            channel_id,
            notice: None,
            report: None,
            charts: None,
            csv_file_name: None,
        }
    }

    fn failed(channel_id: String, error: &ApiError) -> Self {
        DashboardView {
            notice: Some(Notice {
                level: Level::Error,
                message: error.to_string(),
            }),
            ..Self::idle(channel_id)
        }
    }

    fn analyzed(channel_id: String, report: ChannelReport) -> Self {
        // no table, charts or download for a channel without uploads
        if report.videos.is_empty() {
            return DashboardView {
                notice: Some(Notice {
                    level: Level::Warning,
                    message: NO_VIDEOS.to_string(),
                }),
                report: Some(report),
                ..Self::idle(channel_id)
            };
        }

        DashboardView {
            charts: Some(Charts::from_videos(&report.videos)),
            csv_file_name: Some(export::file_name(&report.summary.channel_name)),
            report: Some(report),
            ..Self::idle(channel_id)
        }
    }
}

#[instrument(skip(app))]
pub async fn show<T: Transport>(
    State(app): State<App<T>>, Query(query): Query<AnalyzeQuery>,
) -> Response {
    let Some(input) = query.channel_id else {
        let view = DashboardView::idle(app.default_channel_id.clone());
        return RenderHtml(DASHBOARD, app.engine, view).into_response();
    };

    let result = run_analysis(&app, &input).await;
    let channel_id = input.trim().to_string();

    match result {
        Ok(report) => {
            let view = DashboardView::analyzed(channel_id, report);
            RenderHtml(DASHBOARD, app.engine, view).into_response()
        }
        Err(error) => {
            let view = DashboardView::failed(channel_id, &error);
            (error.status(), RenderHtml(DASHBOARD, app.engine, view)).into_response()
        }
    }
}
