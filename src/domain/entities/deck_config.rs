//! Text fields of the deck that a host may override.

use serde::{Deserialize, Serialize};

pub const DEFAULT_COURSE_TITLE: &str = "Inteligência Artificial para Análise de Dados e Consultoria";
pub const DEFAULT_INSTRUCTOR_NAME: &str = "Instrutor: Diogo Albuquerque";
pub const DEFAULT_COMPANY_NAME: &str = "Crescer Negócios e Consultoria";

/// Live text configuration. Always replaced as a whole, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    pub course_title: String,
    pub instructor_name: String,
    pub company_name: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            course_title: DEFAULT_COURSE_TITLE.to_string(),
            instructor_name: DEFAULT_INSTRUCTOR_NAME.to_string(),
            company_name: DEFAULT_COMPANY_NAME.to_string(),
        }
    }
}

impl DeckConfig {
    /// Returns a new snapshot with the fields present in `update` replaced.
    /// Absent fields keep the value of `self`.
    #[must_use]
    pub fn merged(&self, update: &DeckConfigUpdate) -> Self {
        Self {
            course_title: update
                .course_title
                .clone()
                .unwrap_or_else(|| self.course_title.clone()),
            instructor_name: update
                .instructor_name
                .clone()
                .unwrap_or_else(|| self.instructor_name.clone()),
            company_name: update
                .company_name
                .clone()
                .unwrap_or_else(|| self.company_name.clone()),
        }
    }
}

/// Partial snapshot pushed by a host or read from the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfigUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

impl DeckConfigUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.course_title.is_none() && self.instructor_name.is_none() && self.company_name.is_none()
    }
}
