//! One-slot snapshot persistence for the form.
//!
//! The whole FormValues map is written as a flat JSON object to a single
//! file under the data directory. Loading is deliberately forgiving: a
//! missing or corrupt file means "nothing to restore" and leaves the live
//! form untouched — it must never take the session down.

use crate::error::ProformaError;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::warn;

/// File name of the snapshot slot inside the data directory.
pub const SNAPSHOT_FILE: &str = "proposal_form.json";

/// Write the snapshot, creating the parent directory if needed.
pub fn save_snapshot(path: &Path, values: &BTreeMap<String, String>) -> Result<(), ProformaError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(values)?;
    fs::write(path, json)?;
    Ok(())
}

/// Read the snapshot back. `None` when the file is absent or unreadable or
/// does not parse as a flat string map; corruption is logged, not raised.
pub fn load_snapshot(path: &Path) -> Option<BTreeMap<String, String>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return None,
    };
    match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
        Ok(values) => Some(values),
        Err(e) => {
            warn!("snapshot at {} is corrupt, ignoring: {e}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormStore;
    use tempfile::tempdir;

    #[test]
    fn save_then_load_round_trips_the_snapshot() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(SNAPSHOT_FILE);
        let mut store = FormStore::new();
        store.set("title", "清掃活動");
        save_snapshot(&path, &store.snapshot()).expect("save");

        let loaded = load_snapshot(&path).expect("snapshot present");
        assert_eq!(loaded["title"], "清掃活動");
        assert_eq!(loaded["timeStart"], "09:00");
    }

    #[test]
    fn missing_file_is_a_noop_restore() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(SNAPSHOT_FILE);
        let mut store = FormStore::new();
        let before = store.snapshot();
        // caller leaves the store untouched when there is nothing to restore
        if let Some(snap) = load_snapshot(&path) {
            store.restore_snapshot(snap);
        }
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn corrupt_file_is_a_noop_restore() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(SNAPSHOT_FILE);
        fs::write(&path, "{not json").expect("write");
        assert!(load_snapshot(&path).is_none());
    }

    #[test]
    fn wrong_shape_is_treated_as_corrupt() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(SNAPSHOT_FILE);
        fs::write(&path, r#"{"title": 42}"#).expect("write");
        assert!(load_snapshot(&path).is_none());
    }
}
