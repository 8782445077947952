use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use super::config::{load_config, Config};
use super::utils::ensure_dir;
use crate::api::{HttpTransport, PromptLibraryStore, RequestOrchestrator, StoreError};

/// One saved prompt in the library.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PromptEntry {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub prompt: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
}

impl PromptEntry {
    /// Model identifier, with an absent model read as the empty string.
    pub fn model_or_empty(&self) -> &str {
        self.model.as_deref().unwrap_or("")
    }
}

/// The single durable location holding the serialized library.
///
/// Implementations load and store the whole collection at once; there are
/// no partial writes.
pub trait LibrarySlot: Send + Sync {
    fn load(&self) -> Result<Vec<PromptEntry>, StoreError>;
    fn store(&self, entries: &[PromptEntry]) -> Result<(), StoreError>;
}

impl<S: LibrarySlot + ?Sized> LibrarySlot for Arc<S> {
    fn load(&self) -> Result<Vec<PromptEntry>, StoreError> {
        (**self).load()
    }

    fn store(&self, entries: &[PromptEntry]) -> Result<(), StoreError> {
        (**self).store(entries)
    }
}

/// Library slot backed by a JSON file. An absent or blank file is an empty library.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl LibrarySlot for FileSlot {
    fn load(&self) -> Result<Vec<PromptEntry>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn store(&self, entries: &[PromptEntry]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(entries)?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        // Write beside the target and rename over it so readers never see a torn file.
        let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
        tmp.write_all(&json)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).ok();
        }
        Ok(())
    }
}

/// In-memory library slot. Holds the serialized form so it behaves like a file.
#[derive(Default)]
pub struct MemorySlot {
    raw: Mutex<Option<String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the slot with an already serialized library.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Mutex::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LibrarySlot for MemorySlot {
    fn load(&self) -> Result<Vec<PromptEntry>, StoreError> {
        let raw = self.raw.lock().map_err(|_| StoreError::Lock)?;
        match raw.as_deref() {
            Some(json) => Ok(serde_json::from_str(json)?),
            None => Ok(Vec::new()),
        }
    }

    fn store(&self, entries: &[PromptEntry]) -> Result<(), StoreError> {
        let json = serde_json::to_string(entries)?;
        *self.raw.lock().map_err(|_| StoreError::Lock)? = Some(json);
        Ok(())
    }
}

/// Runtime context holding paths and configuration.
pub struct AppCtx {
    pub base_dir: PathBuf,
    pub library_path: PathBuf,
    pub config: Config,
}

impl AppCtx {
    /// Resolves `~/.prompt-studio`, loads the config and applies CLI overrides.
    pub fn init(
        server_override: Option<String>,
        library_override: Option<PathBuf>,
    ) -> Result<Self, String> {
        let home =
            env::var("HOME").map_err(|_| "Unable to determine HOME directory".to_string())?;
        let base_dir = PathBuf::from(home).join(".prompt-studio");
        ensure_dir(&base_dir)?;

        let mut config = load_config(&base_dir)?;
        if let Some(server) = server_override {
            config.server_url = server;
        }

        let library_path = library_override
            .or_else(|| config.library_path.clone())
            .unwrap_or_else(|| base_dir.join("library.json"));

        Ok(Self {
            base_dir,
            library_path,
            config,
        })
    }

    /// Opens the prompt library stored at the configured path.
    pub fn library(&self) -> PromptLibraryStore {
        PromptLibraryStore::new(FileSlot::new(&self.library_path))
    }

    /// Builds an orchestrator talking to the configured backend.
    pub fn orchestrator(&self) -> Result<RequestOrchestrator<HttpTransport>, String> {
        let transport = HttpTransport::new(&self.config.server_url, self.config.request_timeout())
            .map_err(|e| format!("Invalid server URL '{}': {}", self.config.server_url, e))?;
        Ok(RequestOrchestrator::new(transport))
    }
}
