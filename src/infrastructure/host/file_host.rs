//! Host adapter backed by a watched JSON file.
//!
//! An external editor writes partial updates such as
//! `{"course_title": "..."}` to the watched file. Every accepted update is
//! answered with a `<file>.panel.json` sidecar holding the edit panel values
//! and capabilities, produced by the deck's introspection functions.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::domain::entities::{DeckConfig, DeckConfigUpdate};
use crate::domain::errors::HostError;
use crate::domain::ports::{ConfigHostPort, DeckIntrospection, EditableField, HostCapabilities};

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);
const PANEL_SUFFIX: &str = ".panel.json";

/// Sidecar written for the external editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelDocument {
    pub values: Vec<EditableField>,
    pub capabilities: HostCapabilities,
}

pub struct FileConfigHost {
    path: PathBuf,
    poll_interval: Duration,
    last_seen: Option<String>,
    introspection: Option<Arc<dyn DeckIntrospection>>,
}

impl FileConfigHost {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_poll_interval(path, DEFAULT_POLL_INTERVAL)
    }

    #[must_use]
    pub fn with_poll_interval(path: impl Into<PathBuf>, poll_interval: Duration) -> Self {
        Self {
            path: path.into(),
            poll_interval,
            last_seen: None,
            introspection: None,
        }
    }

    /// Location of the edit panel sidecar.
    #[must_use]
    pub fn panel_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(PANEL_SUFFIX);
        PathBuf::from(name)
    }

    /// Reads the watched file. Returns `Ok(None)` if it is missing or unchanged.
    async fn read_update(&mut self) -> Result<Option<DeckConfigUpdate>, HostError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(HostError::io(self.path.display().to_string(), e.to_string())),
        };

        if self.last_seen.as_deref() == Some(content.as_str()) {
            return Ok(None);
        }

        let parsed = serde_json::from_str::<DeckConfigUpdate>(&content);
        self.last_seen = Some(content);
        parsed
            .map(Some)
            .map_err(|e| HostError::malformed(e.to_string()))
    }

    fn publish_panel(&self, incoming: &DeckConfigUpdate) -> Result<(), HostError> {
        let Some(introspection) = &self.introspection else {
            return Ok(());
        };

        let document = PanelDocument {
            values: introspection.edit_panel_values(incoming),
            capabilities: introspection.capabilities(),
        };
        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| HostError::publish_failed(e.to_string()))?;

        let panel_path = self.panel_path();
        let parent = panel_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let write = || -> std::io::Result<()> {
            let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
            temp_file.write_all(json.as_bytes())?;
            temp_file.persist(&panel_path).map_err(|e| e.error)?;
            Ok(())
        };
        write().map_err(|e| HostError::publish_failed(e.to_string()))?;

        debug!(path = %panel_path.display(), "Published edit panel values");
        Ok(())
    }
}

#[async_trait]
impl ConfigHostPort for FileConfigHost {
    fn init(
        &mut self,
        defaults: &DeckConfig,
        introspection: Arc<dyn DeckIntrospection>,
    ) -> Result<(), HostError> {
        if self.introspection.is_some() {
            return Err(HostError::AlreadyInitialized);
        }
        self.introspection = Some(introspection);
        info!(
            path = %self.path.display(),
            course_title = %defaults.course_title,
            "Watching host config file"
        );
        self.publish_panel(&DeckConfigUpdate::default())
    }

    async fn next_update(&mut self) -> Option<DeckConfigUpdate> {
        loop {
            match self.read_update().await {
                Ok(Some(update)) => {
                    if let Err(e) = self.publish_panel(&update) {
                        warn!(error = %e, "Failed to publish edit panel values");
                    }
                    return Some(update);
                }
                Ok(None) => {}
                Err(e) if e.is_recoverable() => warn!(error = %e, "Ignoring host config update"),
                Err(e) => {
                    error!(error = %e, "Host config file unusable");
                    return None;
                }
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}
