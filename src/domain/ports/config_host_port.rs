//! Configuration-injection host port definition.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{DeckConfig, DeckConfigUpdate};
use crate::domain::errors::HostError;

/// One entry of the host's edit panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditableField {
    /// Host-side key, e.g. `course_title`.
    pub key: String,
    /// Value the panel should display.
    pub value: String,
}

/// Styling capabilities the deck exposes to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostCapabilities {
    /// Elements whose color the host may change.
    pub recolorables: Vec<String>,
    /// Elements whose border the host may change.
    pub borderables: Vec<String>,
    /// Whether the font family is editable.
    pub font_editable: bool,
    /// Whether the font size is editable.
    pub font_sizeable: bool,
}

/// Read-only mapping functions the deck hands to its host.
pub trait DeckIntrospection: Send + Sync {
    /// Current editable values given the host's latest raw snapshot.
    fn edit_panel_values(&self, incoming: &DeckConfigUpdate) -> Vec<EditableField>;

    /// Capability metadata.
    fn capabilities(&self) -> HostCapabilities;
}

/// Optional external driver that pushes configuration snapshots.
#[async_trait]
pub trait ConfigHostPort: Send {
    /// Called at most once, before any update is requested.
    ///
    /// # Errors
    /// Returns `HostError` if the host cannot be set up.
    fn init(
        &mut self,
        defaults: &DeckConfig,
        introspection: Arc<dyn DeckIntrospection>,
    ) -> Result<(), HostError>;

    /// Waits for the next partial snapshot. `None` means the host is gone.
    async fn next_update(&mut self) -> Option<DeckConfigUpdate>;
}

#[cfg(test)]
#[allow(dead_code)]
pub mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Host replaying a fixed list of updates.
    #[derive(Default)]
    pub struct MockConfigHost {
        pub updates: VecDeque<DeckConfigUpdate>,
        pub init_calls: Arc<Mutex<Vec<DeckConfig>>>,
        pub introspection: Option<Arc<dyn DeckIntrospection>>,
        pub fail_init: bool,
    }

    impl MockConfigHost {
        pub fn new(updates: Vec<DeckConfigUpdate>) -> Self {
            Self {
                updates: updates.into(),
                ..Self::default()
            }
        }

        pub fn failing() -> Self {
            Self {
                fail_init: true,
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl ConfigHostPort for MockConfigHost {
        fn init(
            &mut self,
            defaults: &DeckConfig,
            introspection: Arc<dyn DeckIntrospection>,
        ) -> Result<(), HostError> {
            if self.fail_init {
                return Err(HostError::io("mock", "unavailable"));
            }
            if self.introspection.is_some() {
                return Err(HostError::AlreadyInitialized);
            }
            self.init_calls.lock().unwrap().push(defaults.clone());
            self.introspection = Some(introspection);
            Ok(())
        }

        async fn next_update(&mut self) -> Option<DeckConfigUpdate> {
            self.updates.pop_front()
        }
    }
}
