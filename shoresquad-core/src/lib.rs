//! ShoreSquad Core
//!
//! Platform-agnostic logic for the ShoreSquad beach-cleanup coordinator.
//! This crate provides the squad state store, the forecast normalizer, and
//! their supporting data without UI or platform-specific dependencies.
//! Durable storage and wall-clock time enter through the [`store::SnapshotBackend`]
//! and [`store::TimeSource`] traits, implemented by each frontend.

pub mod beaches;
pub mod chat;
pub mod forecast;
pub mod impact;
pub mod seed;
pub mod state;
pub mod store;

// Re-export commonly used types
pub use beaches::{Beach, BeachCatalog};
pub use chat::{ChatIntent, detect_intent, pick_response, responses};
pub use forecast::{
    ForecastDay, ForecastEntry, IconCategory, RawForecastResponse, Reading, icon_for_condition,
    normalize, updated_label,
};
pub use impact::{MonthlyImpact, monthly_impact, total_kg};
pub use seed::SeedData;
pub use state::{AppState, CleanupEvent, CrewMember, GeoPoint, SNAPSHOT_VERSION, Snapshot};
pub use store::{SnapshotBackend, SquadStore, StoreError, TimeSource};
