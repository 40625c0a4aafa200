use chrono::NaiveDate;
use derive_new::new;
use serde::{Deserialize, Serialize};

pub use channel::*;
pub use video::*;

mod channel;
mod video;
