//! The editing session: schema, tabs and the change tracker they share.
//!
//! A [`Session`] is the single owner of the [`ChangeTracker`].  Controls
//! get a clone of the handle at construction time; nothing reaches the
//! tracker through globals.

use crate::assembler::{assemble, Tab};
use crate::hyprlang::render_overrides;
use crate::schema::{Schema, SchemaError};
use crate::tracker::{ChangeTracker, SharedTracker};
use log::info;
use std::path::{Path, PathBuf};

/// Errors from [`Session::save`].
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("failed to create {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Outcome of a save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    /// Number of changed options.
    pub entries: usize,
    /// Where the overrides file went, if a save target is configured.
    pub written_to: Option<PathBuf>,
}

/// Everything one run of the editor works on.
#[derive(Debug)]
pub struct Session {
    tabs: Vec<Tab>,
    tracker: SharedTracker,
    save_target: Option<PathBuf>,
}

impl Session {
    /// Build the controls for `schema`, all bound to a fresh tracker.
    pub fn new(schema: &Schema, save_target: Option<PathBuf>) -> Result<Self, SchemaError> {
        let tracker = ChangeTracker::shared();
        let tabs = assemble(schema, &tracker)?;
        info!(
            "session ready: {} tab(s), {} option(s)",
            tabs.len(),
            schema.options().count()
        );
        Ok(Self {
            tabs,
            tracker,
            save_target,
        })
    }

    /// Load the schema at `path` and build a session from it.
    pub fn load(path: &Path, save_target: Option<PathBuf>) -> Result<Self, SchemaError> {
        let schema = Schema::load(path)?;
        info!("loaded schema from {}", path.display());
        Self::new(&schema, save_target)
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// A handle to the session's tracker.
    pub fn tracker(&self) -> SharedTracker {
        self.tracker.clone()
    }

    /// Where Save writes the overrides file, if anywhere.
    pub fn save_target(&self) -> Option<&Path> {
        self.save_target.as_deref()
    }

    /// Dump every tracked change to the log and, when a save target is
    /// set, write them as a Hyprland overrides file.
    pub fn save(&self) -> Result<SaveReport, SaveError> {
        let tracker = self.tracker.borrow();
        info!("session has {} changed option(s)", tracker.len());
        for (name, value) in tracker.iter() {
            info!("{}: {}", name, value);
        }

        let written_to = match &self.save_target {
            Some(path) => {
                write_overrides(path, &render_overrides(&tracker))?;
                info!("wrote overrides to {}", path.display());
                Some(path.clone())
            }
            None => None,
        };

        Ok(SaveReport {
            entries: tracker.len(),
            written_to,
        })
    }
}

fn write_overrides(path: &Path, contents: &str) -> Result<(), SaveError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|source| SaveError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, contents).map_err(|source| SaveError::Write {
        path: path.to_path_buf(),
        source,
    })
}
