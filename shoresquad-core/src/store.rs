//! The squad store: validated mutations with durable persistence.
//!
//! Every mutating operation validates its inputs, applies the change, and
//! writes a fresh snapshot through the [`SnapshotBackend`]. Callers never
//! touch the state directly, and the cumulative impact figure is only ever
//! recomputed here, so it cannot drift from the cleanup collection.
use chrono::NaiveDate;
use thiserror::Error;

use crate::impact::{self, MonthlyImpact};
use crate::seed::SeedData;
use crate::state::{AppState, CleanupEvent, CrewMember, GeoPoint, SNAPSHOT_VERSION, Snapshot};

/// Durable storage for the squad snapshot. The web frontend backs this with
/// browser localStorage; tests use an in-memory cell.
pub trait SnapshotBackend {
    type Error: std::error::Error;

    /// Read the previously written snapshot, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when a blob exists but cannot be read or parsed.
    fn read(&self) -> Result<Option<Snapshot>, Self::Error>;

    /// Overwrite the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error when the blob cannot be written, e.g. storage quota
    /// exhausted.
    fn write(&self, snapshot: &Snapshot) -> Result<(), Self::Error>;
}

/// Wall-clock access for id generation and join timestamps.
pub trait TimeSource {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
    /// The current instant as an ISO-8601 string.
    fn now_iso(&self) -> String;
}

/// Validation failures surfaced to the caller. The operation that returned
/// one has left the state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("member name must not be empty")]
    EmptyName,
    #[error("cleanup location must not be empty")]
    EmptyLocation,
    #[error("cleanup date must be a YYYY-MM-DD date")]
    InvalidDate,
    #[error("at least one member must attend")]
    NoMembers,
    #[error("removed weight must be a non-negative number")]
    InvalidKg,
    #[error("no entry at index {0}")]
    OutOfRange(usize),
}

/// Single source of truth for crew, cleanups, and impact.
#[derive(Debug, Clone)]
pub struct SquadStore<B, T> {
    state: AppState,
    backend: B,
    time: T,
}

impl<B, T> SquadStore<B, T>
where
    B: SnapshotBackend,
    T: TimeSource,
{
    /// Construct a store over the given seed data. Nothing is persisted
    /// until the first mutation.
    pub fn new(seed: SeedData, backend: B, time: T) -> Self {
        let mut state = AppState {
            crew: seed.crew,
            cleanups: seed.cleanups,
            ..AppState::default()
        };
        state.total_impact_kg = impact::total_kg(&state.cleanups);
        Self {
            state,
            backend,
            time,
        }
    }

    /// Restore the last persisted snapshot, if one exists. Called once at
    /// startup; a missing or unreadable blob leaves the seed defaults in
    /// place and never fails.
    pub fn hydrate(&mut self) {
        match self.backend.read() {
            Ok(Some(snapshot)) => self.apply_snapshot(snapshot),
            Ok(None) => {}
            Err(e) => log::warn!("ignoring unreadable squad snapshot: {e}"),
        }
    }

    fn apply_snapshot(&mut self, snapshot: Snapshot) {
        if snapshot.version > SNAPSHOT_VERSION {
            log::warn!(
                "ignoring squad snapshot with unknown version {}",
                snapshot.version
            );
            return;
        }
        let had_total = snapshot.total_impact_kg.is_some();
        if let Some(crew) = snapshot.crew {
            self.state.crew = crew;
        }
        if let Some(cleanups) = snapshot.cleanups {
            self.state.cleanups = cleanups;
        }
        if let Some(total) = snapshot.total_impact_kg {
            self.state.total_impact_kg = total;
        }
        if !had_total {
            self.sync_total();
        }
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Record the browser's reported position. Transient; not persisted.
    pub fn set_user_location(&mut self, point: GeoPoint) {
        self.state.user_location = Some(point);
    }

    /// Add a member to the crew. A blank role falls back to `"Member"`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyName`] when the trimmed name is empty.
    pub fn add_crew_member(&mut self, name: &str, role: &str) -> Result<CrewMember, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        let member = CrewMember {
            id: self.next_id(),
            name: name.to_string(),
            role: normalized_role(role),
            joined_at: self.time.now_iso(),
        };
        self.state.crew.push(member.clone());
        self.persist();
        Ok(member)
    }

    /// Update an existing member's name and role in place.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyName`] for a blank name or
    /// [`StoreError::OutOfRange`] when the index does not exist.
    pub fn edit_crew_member(
        &mut self,
        index: usize,
        name: &str,
        role: &str,
    ) -> Result<(), StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        let member = self
            .state
            .crew
            .get_mut(index)
            .ok_or(StoreError::OutOfRange(index))?;
        member.name = name.to_string();
        member.role = normalized_role(role);
        self.persist();
        Ok(())
    }

    /// Remove a member. Crew changes never touch the impact total.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::OutOfRange`] when the index does not exist.
    pub fn remove_crew_member(&mut self, index: usize) -> Result<CrewMember, StoreError> {
        if index >= self.state.crew.len() {
            return Err(StoreError::OutOfRange(index));
        }
        let removed = self.state.crew.remove(index);
        self.persist();
        Ok(removed)
    }

    /// Schedule (or log) a cleanup event.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the location is blank, the date is
    /// not `YYYY-MM-DD`, the headcount is zero, or the weight is negative
    /// or not finite.
    pub fn add_cleanup(
        &mut self,
        location: &str,
        date: &str,
        members: u32,
        kg: f64,
    ) -> Result<CleanupEvent, StoreError> {
        let event = validate_cleanup(location, date, members, kg)?;
        self.state.cleanups.push(event.clone());
        self.sync_total();
        self.persist();
        Ok(event)
    }

    /// Replace a cleanup event wholesale.
    ///
    /// # Errors
    ///
    /// Same validation as [`Self::add_cleanup`], plus
    /// [`StoreError::OutOfRange`] for a missing index.
    pub fn edit_cleanup(
        &mut self,
        index: usize,
        location: &str,
        date: &str,
        members: u32,
        kg: f64,
    ) -> Result<(), StoreError> {
        let event = validate_cleanup(location, date, members, kg)?;
        let slot = self
            .state
            .cleanups
            .get_mut(index)
            .ok_or(StoreError::OutOfRange(index))?;
        *slot = event;
        self.sync_total();
        self.persist();
        Ok(())
    }

    /// Remove a cleanup event, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::OutOfRange`] when the index does not exist.
    pub fn remove_cleanup(&mut self, index: usize) -> Result<CleanupEvent, StoreError> {
        if index >= self.state.cleanups.len() {
            return Err(StoreError::OutOfRange(index));
        }
        let removed = self.state.cleanups.remove(index);
        self.sync_total();
        self.persist();
        Ok(removed)
    }

    /// Write the current snapshot to durable storage. Best effort: a failed
    /// write is logged and swallowed.
    pub fn persist(&self) {
        if let Err(e) = self.backend.write(&self.snapshot()) {
            log::warn!("failed to persist squad snapshot: {e}");
        }
    }

    /// The serializable subset of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: SNAPSHOT_VERSION,
            crew: Some(self.state.crew.clone()),
            cleanups: Some(self.state.cleanups.clone()),
            total_impact_kg: Some(self.state.total_impact_kg),
        }
    }

    /// Per-month impact rollup, most recent month first.
    #[must_use]
    pub fn monthly_impact(&self) -> Vec<MonthlyImpact> {
        impact::monthly_impact(&self.state.cleanups)
    }

    fn sync_total(&mut self) {
        self.state.total_impact_kg = impact::total_kg(&self.state.cleanups);
    }

    fn next_id(&self) -> i64 {
        let mut id = self.time.now_millis();
        while self.state.crew.iter().any(|member| member.id == id) {
            id += 1;
        }
        id
    }
}

fn normalized_role(role: &str) -> String {
    let role = role.trim();
    if role.is_empty() {
        "Member".to_string()
    } else {
        role.to_string()
    }
}

fn validate_cleanup(
    location: &str,
    date: &str,
    members: u32,
    kg: f64,
) -> Result<CleanupEvent, StoreError> {
    let location = location.trim();
    if location.is_empty() {
        return Err(StoreError::EmptyLocation);
    }
    let date = date.trim();
    if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return Err(StoreError::InvalidDate);
    }
    if members == 0 {
        return Err(StoreError::NoMembers);
    }
    if !kg.is_finite() || kg < 0.0 {
        return Err(StoreError::InvalidKg);
    }
    Ok(CleanupEvent {
        location: location.to_string(),
        date: date.to_string(),
        kg,
        members,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Shared in-memory backend so two stores can see the same blob, as a
    /// page reload would.
    #[derive(Debug, Clone, Default)]
    struct MemoryBackend {
        blob: Rc<RefCell<Option<String>>>,
    }

    impl SnapshotBackend for MemoryBackend {
        type Error = serde_json::Error;

        fn read(&self) -> Result<Option<Snapshot>, Self::Error> {
            self.blob
                .borrow()
                .as_deref()
                .map(serde_json::from_str)
                .transpose()
        }

        fn write(&self, snapshot: &Snapshot) -> Result<(), Self::Error> {
            *self.blob.borrow_mut() = Some(serde_json::to_string(snapshot)?);
            Ok(())
        }
    }

    #[derive(Debug, Clone, Copy)]
    struct FixedTime;

    impl TimeSource for FixedTime {
        fn now_millis(&self) -> i64 {
            1_764_300_000_000
        }

        fn now_iso(&self) -> String {
            "2025-11-28T09:00:00Z".to_string()
        }
    }

    #[derive(Debug)]
    struct QuotaExceeded;

    impl std::fmt::Display for QuotaExceeded {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("storage quota exceeded")
        }
    }

    impl std::error::Error for QuotaExceeded {}

    #[derive(Debug, Clone, Copy)]
    struct BrokenBackend;

    impl SnapshotBackend for BrokenBackend {
        type Error = QuotaExceeded;

        fn read(&self) -> Result<Option<Snapshot>, Self::Error> {
            Ok(None)
        }

        fn write(&self, _snapshot: &Snapshot) -> Result<(), Self::Error> {
            Err(QuotaExceeded)
        }
    }

    fn sample_store() -> SquadStore<MemoryBackend, FixedTime> {
        SquadStore::new(SeedData::empty(), MemoryBackend::default(), FixedTime)
    }

    fn assert_total_matches_events<B: SnapshotBackend, T: TimeSource>(store: &SquadStore<B, T>) {
        let expected: f64 = store.state().cleanups.iter().map(|e| e.kg).sum();
        assert!(
            (store.state().total_impact_kg - expected).abs() < f64::EPSILON,
            "total {} diverged from event sum {expected}",
            store.state().total_impact_kg
        );
    }

    #[test]
    fn add_crew_member_trims_and_defaults_role() {
        let mut store = sample_store();
        let member = store.add_crew_member("  Priya Sharma  ", "   ").expect("member added");
        assert_eq!(member.name, "Priya Sharma");
        assert_eq!(member.role, "Member");
        assert_eq!(member.joined_at, "2025-11-28T09:00:00Z");
        assert_eq!(store.state().crew.len(), 1);
    }

    #[test]
    fn add_crew_member_rejects_blank_name() {
        let mut store = sample_store();
        assert_eq!(
            store.add_crew_member("   ", "Coordinator"),
            Err(StoreError::EmptyName)
        );
        assert!(store.state().crew.is_empty());
    }

    #[test]
    fn crew_ids_stay_unique_within_one_millisecond() {
        let mut store = sample_store();
        let first = store.add_crew_member("Alex Chen", "Crew Leader").expect("added");
        let second = store.add_crew_member("Marcus Lee", "Member").expect("added");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn edit_crew_member_updates_in_place() {
        let mut store = sample_store();
        store.add_crew_member("Zara", "Member").expect("added");
        store
            .edit_crew_member(0, "Zara Mohamed", "Coordinator")
            .expect("edited");
        assert_eq!(store.state().crew[0].name, "Zara Mohamed");
        assert_eq!(store.state().crew[0].role, "Coordinator");
    }

    #[test]
    fn edit_crew_member_rejects_missing_index() {
        let mut store = sample_store();
        assert_eq!(
            store.edit_crew_member(3, "Ethan Ng", "Member"),
            Err(StoreError::OutOfRange(3))
        );
    }

    #[test]
    fn remove_crew_member_leaves_total_alone() {
        let mut store = sample_store();
        store
            .add_cleanup("East Coast Park", "2025-11-28", 3, 10.0)
            .expect("cleanup added");
        store.add_crew_member("Alex Chen", "Crew Leader").expect("added");
        store.remove_crew_member(0).expect("removed");
        assert!((store.state().total_impact_kg - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn cleanup_total_tracks_every_mutation() {
        let mut store = sample_store();
        store
            .add_cleanup("East Coast Park", "2025-11-28", 3, 10.0)
            .expect("added");
        assert_total_matches_events(&store);
        store
            .add_cleanup("Sentosa Beach", "2025-11-21", 4, 15.0)
            .expect("added");
        assert_total_matches_events(&store);
        store
            .edit_cleanup(0, "East Coast Park", "2025-11-28", 5, 12.5)
            .expect("edited");
        assert_total_matches_events(&store);
        store.remove_cleanup(1).expect("removed");
        assert_total_matches_events(&store);
        assert!((store.state().total_impact_kg - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn remove_cleanup_decreases_total_by_its_weight() {
        let mut store = sample_store();
        store
            .add_cleanup("Pasir Ris Park", "2025-11-14", 5, 20.0)
            .expect("added");
        store
            .add_cleanup("Changi Beach", "2025-11-15", 2, 4.5)
            .expect("added");
        let before = store.state().total_impact_kg;
        store.remove_cleanup(0).expect("removed");
        assert!((before - store.state().total_impact_kg - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn cleanup_validation_rejects_bad_input_without_state_change() {
        let mut store = sample_store();
        assert_eq!(
            store.add_cleanup("  ", "2025-11-28", 3, 1.0),
            Err(StoreError::EmptyLocation)
        );
        assert_eq!(
            store.add_cleanup("Sentosa Beach", "", 3, 1.0),
            Err(StoreError::InvalidDate)
        );
        assert_eq!(
            store.add_cleanup("Sentosa Beach", "28/11/2025", 3, 1.0),
            Err(StoreError::InvalidDate)
        );
        assert_eq!(
            store.add_cleanup("Sentosa Beach", "2025-11-28", 0, 1.0),
            Err(StoreError::NoMembers)
        );
        assert_eq!(
            store.add_cleanup("Sentosa Beach", "2025-11-28", 3, -1.0),
            Err(StoreError::InvalidKg)
        );
        assert_eq!(
            store.add_cleanup("Sentosa Beach", "2025-11-28", 3, f64::NAN),
            Err(StoreError::InvalidKg)
        );
        assert!(store.state().cleanups.is_empty());
        assert!((store.state().total_impact_kg - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn persist_then_hydrate_round_trips_state() {
        let backend = MemoryBackend::default();
        let mut store = SquadStore::new(SeedData::empty(), backend.clone(), FixedTime);
        store.add_crew_member("Alex Chen", "Crew Leader").expect("added");
        store
            .add_cleanup("East Coast Park", "2025-11-28", 3, 10.0)
            .expect("added");
        store
            .add_cleanup("Sentosa Beach", "2025-11-21", 4, 15.0)
            .expect("added");

        let mut reloaded = SquadStore::new(SeedData::empty(), backend, FixedTime);
        reloaded.hydrate();
        assert_eq!(reloaded.state().crew, store.state().crew);
        assert_eq!(reloaded.state().cleanups, store.state().cleanups);
        assert!(
            (reloaded.state().total_impact_kg - store.state().total_impact_kg).abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn hydrate_without_snapshot_keeps_seed_defaults() {
        let mut store = SquadStore::new(SeedData::sample(), MemoryBackend::default(), FixedTime);
        let before = store.state().clone();
        store.hydrate();
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn hydrate_ignores_corrupt_blob() {
        let backend = MemoryBackend::default();
        *backend.blob.borrow_mut() = Some("{not json".to_string());
        let mut store = SquadStore::new(SeedData::sample(), backend, FixedTime);
        store.hydrate();
        assert!(!store.state().crew.is_empty());
    }

    #[test]
    fn hydrate_ignores_snapshot_from_the_future() {
        let backend = MemoryBackend::default();
        *backend.blob.borrow_mut() =
            Some(r#"{"version": 9, "crew": [], "cleanups": [], "total_impact_kg": 0.0}"#.to_string());
        let mut store = SquadStore::new(SeedData::sample(), backend, FixedTime);
        store.hydrate();
        assert!(!store.state().crew.is_empty());
    }

    #[test]
    fn hydrate_merges_only_fields_present_in_blob() {
        let backend = MemoryBackend::default();
        *backend.blob.borrow_mut() = Some(
            r#"{"version": 1, "cleanups": [{"location": "Changi Beach", "date": "2025-12-01", "kg": 8.0, "members": 2}]}"#
                .to_string(),
        );
        let mut store = SquadStore::new(SeedData::sample(), backend, FixedTime);
        let seeded_crew = store.state().crew.clone();
        store.hydrate();
        // Crew untouched, cleanups replaced, and the absent total recomputed.
        assert_eq!(store.state().crew, seeded_crew);
        assert_eq!(store.state().cleanups.len(), 1);
        assert!((store.state().total_impact_kg - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn hydrate_leaves_user_location_alone() {
        let backend = MemoryBackend::default();
        let mut store = SquadStore::new(SeedData::empty(), backend.clone(), FixedTime);
        store.persist();
        store.set_user_location(GeoPoint {
            lat: 1.3521,
            lng: 103.8198,
        });
        store.hydrate();
        assert!(store.state().user_location.is_some());
    }

    #[test]
    fn mutations_survive_a_write_failure_path() {
        let mut store = SquadStore::new(SeedData::empty(), BrokenBackend, FixedTime);
        store
            .add_cleanup("East Coast Park", "2025-11-28", 3, 10.0)
            .expect("add succeeds even when persistence is unavailable");
        assert_eq!(store.state().cleanups.len(), 1);
    }

    #[test]
    fn monthly_impact_reflects_current_cleanups() {
        let mut store = sample_store();
        store
            .add_cleanup("East Coast Park", "2025-11-28", 3, 10.0)
            .expect("added");
        store
            .add_cleanup("Sentosa Beach", "2025-11-21", 4, 15.0)
            .expect("added");
        store
            .add_cleanup("Pasir Ris Park", "2025-10-05", 5, 5.0)
            .expect("added");
        let months = store.monthly_impact();
        assert_eq!(months.len(), 2);
        assert_eq!(months[0].cleanups, 2);
        assert!((months[0].kg - 25.0).abs() < f64::EPSILON);
    }
}
