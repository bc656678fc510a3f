//! Host configuration sync.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::domain::entities::{DeckConfig, DeckConfigUpdate};
use crate::domain::errors::HostError;
use crate::domain::ports::{ConfigHostPort, DeckIntrospection, EditableField, HostCapabilities};

pub const COURSE_TITLE_KEY: &str = "course_title";
pub const INSTRUCTOR_NAME_KEY: &str = "instructor_name";
pub const COMPANY_NAME_KEY: &str = "company_name";

/// Introspection offered to the host. Values fall back to the built-in
/// defaults, not to the live config.
#[derive(Debug, Clone)]
pub struct DeckFields {
    defaults: DeckConfig,
}

impl DeckFields {
    #[must_use]
    pub const fn new(defaults: DeckConfig) -> Self {
        Self { defaults }
    }
}

impl DeckIntrospection for DeckFields {
    fn edit_panel_values(&self, incoming: &DeckConfigUpdate) -> Vec<EditableField> {
        let merged = self.defaults.merged(incoming);
        vec![
            EditableField {
                key: COURSE_TITLE_KEY.to_string(),
                value: merged.course_title,
            },
            EditableField {
                key: INSTRUCTOR_NAME_KEY.to_string(),
                value: merged.instructor_name,
            },
            EditableField {
                key: COMPANY_NAME_KEY.to_string(),
                value: merged.company_name,
            },
        ]
    }

    fn capabilities(&self) -> HostCapabilities {
        HostCapabilities::default()
    }
}

/// Holds the live config and swaps it on every host update.
#[derive(Debug, Clone)]
pub struct ConfigSync {
    current: Arc<DeckConfig>,
}

impl ConfigSync {
    #[must_use]
    pub fn new(initial: DeckConfig) -> Self {
        Self {
            current: Arc::new(initial),
        }
    }

    #[must_use]
    pub fn current(&self) -> Arc<DeckConfig> {
        Arc::clone(&self.current)
    }

    /// Replaces the config with `update` merged over the current snapshot.
    /// Returns whether anything changed.
    pub fn apply(&mut self, update: &DeckConfigUpdate) -> bool {
        let next = self.current.merged(update);
        if next == *self.current {
            debug!("Config update changed nothing");
            return false;
        }
        info!(
            course_title = %next.course_title,
            instructor_name = %next.instructor_name,
            company_name = %next.company_name,
            "Applied config update"
        );
        self.current = Arc::new(next);
        true
    }
}

/// Initializes `host` and forwards its updates to `update_tx` from a
/// background task.
///
/// # Errors
/// Returns `HostError` if the host rejects initialization; no task is spawned.
pub fn spawn_host_listener(
    mut host: Box<dyn ConfigHostPort>,
    defaults: &DeckConfig,
    update_tx: mpsc::UnboundedSender<DeckConfigUpdate>,
) -> Result<JoinHandle<()>, HostError> {
    let introspection: Arc<dyn DeckIntrospection> = Arc::new(DeckFields::new(defaults.clone()));
    host.init(defaults, introspection)?;
    info!("Configuration host initialized");

    Ok(tokio::spawn(async move {
        while let Some(update) = host.next_update().await {
            if update.is_empty() {
                continue;
            }
            if update_tx.send(update).is_err() {
                debug!("Config update channel closed");
                break;
            }
        }
        warn!("Configuration host stopped delivering updates");
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockConfigHost;

    fn update(course_title: Option<&str>) -> DeckConfigUpdate {
        DeckConfigUpdate {
            course_title: course_title.map(ToString::to_string),
            ..DeckConfigUpdate::default()
        }
    }

    #[test]
    fn test_edit_panel_values_fall_back_to_defaults() {
        let fields = DeckFields::new(DeckConfig::default());
        let values = fields.edit_panel_values(&update(Some("Novo")));

        assert_eq!(values.len(), 3);
        assert_eq!(values[0].key, COURSE_TITLE_KEY);
        assert_eq!(values[0].value, "Novo");
        assert_eq!(values[1].value, DeckConfig::default().instructor_name);
        assert_eq!(values[2].value, DeckConfig::default().company_name);
    }

    #[test]
    fn test_capabilities_are_empty() {
        let caps = DeckFields::new(DeckConfig::default()).capabilities();

        assert!(caps.recolorables.is_empty());
        assert!(caps.borderables.is_empty());
        assert!(!caps.font_editable);
        assert!(!caps.font_sizeable);
    }

    #[test]
    fn test_apply_partial_update() {
        let mut sync = ConfigSync::new(DeckConfig::default());
        let before = sync.current();

        assert!(sync.apply(&update(Some("X"))));
        let after = sync.current();

        assert_eq!(after.course_title, "X");
        assert_eq!(after.instructor_name, before.instructor_name);
        assert_eq!(after.company_name, before.company_name);
        assert_eq!(before.course_title, DeckConfig::default().course_title);
    }

    #[test]
    fn test_successive_updates_fall_back_to_previous_not_default() {
        let mut sync = ConfigSync::new(DeckConfig::default());
        sync.apply(&DeckConfigUpdate {
            instructor_name: Some("Instrutora: Ana".to_string()),
            ..DeckConfigUpdate::default()
        });
        sync.apply(&update(Some("Y")));

        assert_eq!(sync.current().instructor_name, "Instrutora: Ana");
        assert_eq!(sync.current().course_title, "Y");
    }

    #[test]
    fn test_noop_update_reports_unchanged() {
        let mut sync = ConfigSync::new(DeckConfig::default());
        assert!(!sync.apply(&DeckConfigUpdate::default()));
    }

    #[tokio::test]
    async fn test_listener_forwards_non_empty_updates() {
        let host = MockConfigHost::new(vec![
            update(Some("A")),
            DeckConfigUpdate::default(),
            update(Some("B")),
        ]);
        let init_calls = Arc::clone(&host.init_calls);
        let (tx, mut rx) = mpsc::unbounded_channel();

        let handle = spawn_host_listener(Box::new(host), &DeckConfig::default(), tx)
            .expect("host initializes");

        assert_eq!(rx.recv().await, Some(update(Some("A"))));
        assert_eq!(rx.recv().await, Some(update(Some("B"))));
        assert_eq!(rx.recv().await, None);
        handle.await.expect("listener finishes");
        assert_eq!(init_calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_listener_reports_init_failure() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let result = spawn_host_listener(
            Box::new(MockConfigHost::failing()),
            &DeckConfig::default(),
            tx,
        );

        assert!(matches!(result, Err(HostError::Io { .. })));
    }
}
