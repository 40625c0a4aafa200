use derive_new::new;

use super::templates::{templates, AppEngine};
use crate::youtube::{HttpTransport, YouTube};

/// Shared by every request. Nothing in here is mutated after start-up.
#[derive(Clone, new)]
pub struct App<T = HttpTransport> {
    pub youtube: YouTube<T>,
    pub engine: AppEngine,
    /// Channel pre-filled in the form before anything was analyzed.
    pub default_channel_id: String,
}

impl<T> App<T> {
    pub fn youtube(&self) -> &YouTube<T> {
        &self.youtube
    }
}

pub fn create_app<T>(
    youtube: YouTube<T>, default_channel_id: impl Into<String>,
) -> tera::Result<App<T>> {
    let engine = templates()?;
    Ok(App::new(youtube, engine, default_channel_id.into()))
}
