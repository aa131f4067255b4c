// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Filesystem-backed `ConfigStore` for MST tools (uses platform config dir).

use directories::ProjectDirs;
use mst_app_core::config::{ConfigError, ConfigStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Store configs as JSON files under a base directory.
pub struct FsConfigStore {
    base: PathBuf,
}

impl FsConfigStore {
    /// Create a store rooted at the user config directory (e.g., `~/.config/MstLab`).
    pub fn new() -> Result<Self, ConfigError> {
        let proj = ProjectDirs::from("dev", "flyingrobots", "MstLab")
            .ok_or_else(|| ConfigError::Other("could not resolve config dir".into()))?;
        Self::at(proj.config_dir())
    }

    /// Create a store rooted at `base`, creating the directory if needed.
    pub fn at(base: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let base = base.as_ref().to_path_buf();
        fs::create_dir_all(&base)?;
        Ok(Self { base })
    }

    /// Directory holding the JSON files.
    pub fn base(&self) -> &Path {
        &self.base
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl ConfigStore for FsConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(ConfigError::NotFound),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    use super::*;
    use mst_app_core::config::ConfigService;
    use mst_app_core::prefs::{AlgorithmChoice, SolverPrefs, SOLVER_PREFS_KEY};

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsConfigStore::at(dir.path()).unwrap();
        assert!(matches!(store.load_raw("nope"), Err(ConfigError::NotFound)));
    }

    #[test]
    fn prefs_persist_as_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let svc = ConfigService::new(FsConfigStore::at(dir.path().join("nested")).unwrap());
        let prefs = SolverPrefs {
            algorithm: AlgorithmChoice::Boruvka,
            ..SolverPrefs::default()
        };
        svc.save(SOLVER_PREFS_KEY, &prefs).unwrap();

        assert_eq!(svc.store().base(), dir.path().join("nested"));
        let on_disk = fs::read_to_string(svc.store().base().join("solver.json")).unwrap();
        assert!(on_disk.contains("\"boruvka\""));
        assert_eq!(svc.load::<SolverPrefs>(SOLVER_PREFS_KEY).unwrap(), Some(prefs));
    }
}
