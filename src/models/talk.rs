//! Talk model.

use serde::{Deserialize, Serialize};

/// A talk given at an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Talk {
    pub id: String,
    pub title: String,
    pub event_name: String,
    /// Free-form date as displayed, e.g. "March 2024".
    pub date: String,
    pub description: String,
    pub image_url: String,
    #[serde(default)]
    pub video_url: Option<String>,
}
