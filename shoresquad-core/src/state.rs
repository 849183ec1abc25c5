//! Squad state: crew roster, cleanup schedule, cumulative impact.
use serde::{Deserialize, Serialize};

/// Version stamped into every written snapshot. Snapshots carrying a higher
/// version than this are ignored at hydration time.
pub const SNAPSHOT_VERSION: u32 = 1;

fn default_role() -> String {
    "Member".to_string()
}

fn default_members() -> u32 {
    1
}

/// A coordinate pair captured from the browser's geolocation API.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// One member of the cleanup crew.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewMember {
    /// Opaque timestamp-derived identifier, unique within the roster.
    pub id: i64,
    pub name: String,
    #[serde(default = "default_role")]
    pub role: String,
    /// ISO-8601 timestamp of when the member joined.
    #[serde(default)]
    pub joined_at: String,
}

/// A scheduled or completed cleanup event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanupEvent {
    pub location: String,
    /// Calendar date in `YYYY-MM-DD` form.
    pub date: String,
    /// Kilograms of waste removed. Zero for cleanups still in planning.
    #[serde(default)]
    pub kg: f64,
    /// Headcount, at least one.
    #[serde(default = "default_members")]
    pub members: u32,
}

/// The whole of the squad's state for the lifetime of the page.
///
/// `user_location` is transient: it is captured fresh each session and never
/// written to the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub crew: Vec<CrewMember>,
    #[serde(default)]
    pub cleanups: Vec<CleanupEvent>,
    #[serde(default)]
    pub total_impact_kg: f64,
    #[serde(skip)]
    pub user_location: Option<GeoPoint>,
}

/// The serialized subset of [`AppState`] written to durable storage.
///
/// Fields are optional so that hydration overwrites exactly the fields a
/// stored blob carries and leaves the rest of the state alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crew: Option<Vec<CrewMember>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleanups: Option<Vec<CleanupEvent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_impact_kg: Option<f64>,
}
