//! Browser-backed implementations of the core platform seams.
use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use shoresquad_core::{Snapshot, SnapshotBackend, TimeSource};

/// localStorage key holding the squad snapshot.
pub const STORAGE_KEY: &str = "shoresquad.save";

/// Snapshot persistence over browser localStorage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalStorageBackend;

impl SnapshotBackend for LocalStorageBackend {
    type Error = StorageError;

    fn read(&self) -> Result<Option<Snapshot>, Self::Error> {
        match LocalStorage::get(STORAGE_KEY) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, snapshot: &Snapshot) -> Result<(), Self::Error> {
        LocalStorage::set(STORAGE_KEY, snapshot)
    }
}

/// Wall-clock time from the JavaScript `Date` API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserTime;

impl TimeSource for BrowserTime {
    #[allow(clippy::cast_possible_truncation)]
    fn now_millis(&self) -> i64 {
        js_sys::Date::now() as i64
    }

    fn now_iso(&self) -> String {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
}

/// Today's date as `YYYY-MM-DD`, the form default for new cleanups.
#[must_use]
pub fn today_ymd() -> String {
    let iso = BrowserTime.now_iso();
    iso.get(..10).unwrap_or(&iso).to_string()
}
