use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use snafu::ResultExt;
use tracing::instrument;

use super::{run_analysis, AnalyzeQuery, App, ExportSnafu, Result};
use crate::analysis::ChannelReport;
use crate::export;
use crate::youtube::Transport;

#[instrument(skip(app))]
pub async fn report<T: Transport>(
    State(app): State<App<T>>, Path(channel_id): Path<String>,
) -> Result<Json<ChannelReport>> {
    run_analysis(&app, &channel_id).await.map(Json)
}

/// "Download CSV": the analysis is run again since nothing is kept between requests.
#[instrument(skip(app))]
pub async fn csv<T: Transport>(
    State(app): State<App<T>>, Query(query): Query<AnalyzeQuery>,
) -> Result<Response> {
    let input = query.channel_id.unwrap_or_default();
    let report = run_analysis(&app, &input).await?;

    let body = export::to_csv(&report.videos).context(ExportSnafu)?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        export::file_name(&report.summary.channel_name)
    );

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (header::CONTENT_DISPOSITION, disposition),
    ];
    Ok((headers, body).into_response())
}
