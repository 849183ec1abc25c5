//! Injectable seed data for the squad store.
//!
//! Whether a fresh profile starts with the demo roster or a blank slate is
//! the frontend's call; the store itself never bakes content in.
use serde::{Deserialize, Serialize};

use crate::state::{CleanupEvent, CrewMember};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub crew: Vec<CrewMember>,
    #[serde(default)]
    pub cleanups: Vec<CleanupEvent>,
}

impl SeedData {
    /// A blank slate.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The shipped demo roster and past cleanups from static assets.
    /// Falls back to empty if the asset fails to parse.
    #[must_use]
    pub fn sample() -> Self {
        serde_json::from_str(include_str!(
            "../../shoresquad-web/static/assets/data/squad.json"
        ))
        .unwrap_or_default()
    }
}
