use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::model::{Save, Workspace};
use crate::domain::ports::{SessionStore, WorkspaceStore};
use crate::utils::error::{Result, SpliceError};
use crate::utils::validation::Validate;

const WORKSPACE_FILE: &str = "workspace.json";
const SAVES_DIR: &str = "saves";

/// Filesystem-backed store: `workspace.json` plus a `saves/` directory of
/// named snapshots under one base directory.
#[derive(Debug, Clone)]
pub struct LocalStore {
    base_path: PathBuf,
}

impl LocalStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    fn write_bytes(path: &Path, data: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, data)?;
        Ok(())
    }
}

impl WorkspaceStore for LocalStore {
    async fn load_workspace(&self) -> Result<Workspace> {
        let path = self.resolve(WORKSPACE_FILE);
        tracing::debug!("Loading workspace from {}", path.display());
        let data = fs::read(&path)?;
        let workspace: Workspace = serde_json::from_slice(&data)?;
        workspace.validate()?;
        Ok(workspace)
    }

    async fn store_workspace(&self, workspace: &Workspace) -> Result<()> {
        workspace.validate()?;
        let data = serde_json::to_vec_pretty(workspace)?;
        Self::write_bytes(&self.resolve(WORKSPACE_FILE), &data)
    }

    async fn write_artifact(&self, name: &str, data: &[u8]) -> Result<()> {
        tracing::debug!("Writing artifact {} ({} bytes)", name, data.len());
        Self::write_bytes(&self.resolve(name), data)
    }
}

#[async_trait]
impl SessionStore for LocalStore {
    async fn write_save(&self, save: &Save) -> Result<String> {
        let relative = format!("{}/{}.json", SAVES_DIR, save.name);
        let data = serde_json::to_vec_pretty(save)?;
        Self::write_bytes(&self.resolve(&relative), &data)?;
        Ok(relative)
    }

    async fn read_save(&self, name: &str) -> Result<Save> {
        let path = self.resolve(&format!("{}/{}.json", SAVES_DIR, name));
        let data = fs::read(&path)?;
        let save: Save = serde_json::from_slice(&data)?;
        save.data.validate()?;
        Ok(save)
    }

    async fn list_saves(&self) -> Result<Vec<String>> {
        let dir = self.resolve(SAVES_DIR);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

impl LocalStore {
    /// Load the workspace, mapping a missing file to a clearer error for
    /// the CLI.
    pub async fn load_workspace_checked(&self) -> Result<Workspace> {
        let path = self.resolve(WORKSPACE_FILE);
        if !path.exists() {
            return Err(SpliceError::ConfigError {
                message: format!("No workspace found at {}", path.display()),
            });
        }
        self.load_workspace().await
    }
}
