//! Certificate model.

use serde::{Deserialize, Serialize};

/// A certification earned, shown in the certificates grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: String,
    pub title: String,
    pub issuer: String,
    /// Free-form date as displayed, e.g. "2024".
    pub date: String,
    pub image_url: String,
    #[serde(default)]
    pub credential_url: Option<String>,
}
