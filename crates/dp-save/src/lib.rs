//! dp-save: file-backed persistence for the developer pet
//!
//! Stores the avatar state blob as one JSON file wrapped in a small
//! versioned header. Field-level forward compatibility lives in the
//! dp-core codec (missing fields are backfilled on load); this crate
//! only guards the file format itself.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use dp_core::{StateStore, StoreError};

/// Current save file format version
pub const SAVE_VERSION: u32 = 1;

/// Save file header for versioning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveHeader {
    /// Magic identifier
    pub magic: String,
    /// Save format version
    pub version: u32,
    /// Seconds since the Unix epoch at write time
    pub timestamp: u64,
}

impl SaveHeader {
    const MAGIC: &'static str = "DVPT";

    fn new() -> Self {
        Self {
            magic: Self::MAGIC.to_string(),
            version: SAVE_VERSION,
            timestamp: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
        }
    }

    /// A file is readable when the magic matches and the version is not
    /// from a newer build.
    pub fn is_compatible(&self) -> bool {
        self.magic == Self::MAGIC && self.version <= SAVE_VERSION
    }
}

/// Complete save file structure
#[derive(Serialize, Deserialize)]
struct SaveFile {
    header: SaveHeader,
    state: serde_json::Value,
}

/// File-backed implementation of the engine's persistence port
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the per-user default location
    pub fn at_default_location() -> Self {
        Self::new(default_save_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for FileStore {
    fn get(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<SaveFile>(&raw) {
            Ok(save) if save.header.is_compatible() => {
                serde_json::to_string(&save.state).ok()
            }
            // Magic mismatch or a newer version: unreadable, start fresh
            Ok(_) => None,
            // Pre-header save: the whole file is the bare state blob
            Err(_) => Some(raw),
        }
    }

    fn put(&mut self, blob: &str) -> Result<(), StoreError> {
        let state: serde_json::Value = serde_json::from_str(blob)?;
        let save = SaveFile {
            header: SaveHeader::new(),
            state,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&self.path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer(writer, &save)?;
        Ok(())
    }
}

/// Default state file location under the platform data directory
pub fn default_save_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("devpet");
    path.push("state.json");
    path
}

/// Check whether a saved state exists at the given path
pub fn save_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dp_core::{AvatarState, Engine, GameRng, ManualClock};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("devpet_test_{name}.json"))
    }

    #[test]
    fn test_put_and_get_roundtrip() {
        let path = temp_path("roundtrip");
        fs::remove_file(&path).ok();
        assert!(!save_exists(&path));

        let mut store = FileStore::new(&path);
        let state = AvatarState::new(1_000);
        store.put(&state.to_blob().unwrap()).unwrap();
        assert!(save_exists(&path));

        let loaded = AvatarState::from_blob(&store.get().unwrap()).unwrap();
        assert_eq!(loaded, state);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_written_file_carries_header() {
        let path = temp_path("header");
        let mut store = FileStore::new(&path);
        store
            .put(&AvatarState::new(1_000).to_blob().unwrap())
            .unwrap();

        let save: SaveFile = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(save.header.magic, "DVPT");
        assert_eq!(save.header.version, SAVE_VERSION);
        assert!(save.header.is_compatible());

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_headerless_file_loads_as_bare_blob() {
        let path = temp_path("headerless");
        fs::write(&path, AvatarState::new(1_000).to_blob().unwrap()).unwrap();

        let store = FileStore::new(&path);
        let loaded = AvatarState::from_blob(&store.get().unwrap()).unwrap();
        assert_eq!(loaded.last_updated, 1_000);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_incompatible_header_is_rejected() {
        let path = temp_path("future_version");
        let save = SaveFile {
            header: SaveHeader {
                magic: "DVPT".to_string(),
                version: SAVE_VERSION + 1,
                timestamp: 0,
            },
            state: serde_json::json!({"coffee": 9}),
        };
        fs::write(&path, serde_json::to_string(&save).unwrap()).unwrap();
        assert!(FileStore::new(&path).get().is_none());

        let save = SaveFile {
            header: SaveHeader {
                magic: "NOPE".to_string(),
                version: SAVE_VERSION,
                timestamp: 0,
            },
            state: serde_json::json!({"coffee": 9}),
        };
        fs::write(&path, serde_json::to_string(&save).unwrap()).unwrap();
        assert!(FileStore::new(&path).get().is_none());

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_get_missing_file() {
        let store = FileStore::new("/nonexistent/path/state.json");
        assert!(store.get().is_none());
    }

    #[test]
    fn test_engine_backfills_old_file() {
        let path = temp_path("backfill");
        // A save from an older build: headerless, missing
        // skills/quests/tutorial fields
        fs::write(
            &path,
            r#"{"energy":42.0,"motivation":42.0,"focus":42.0,"coffee":7,
                "name":"Sam","last_updated":1000,"last_daily_bonus":1000}"#,
        )
        .unwrap();

        let engine = Engine::new(
            FileStore::new(&path),
            ManualClock::new(2_000, 12),
            GameRng::new(1),
        );
        let state = engine.snapshot();
        assert_eq!(state.energy, 42.0);
        assert_eq!(state.coffee, 7);
        assert_eq!(state.name, "Sam");
        assert!(state.skills.is_empty());
        assert!(state.quests.is_empty());
        assert!(!state.tutorial_completed);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_default_save_path_shape() {
        let path = default_save_path();
        assert!(path.ends_with("devpet/state.json"));
    }
}
