//! Page controllers: each turns one user action into one API round trip and
//! returns a view model for the display surface to render.

pub mod bon;
pub mod dashboard;
pub mod events;
pub mod items;
pub mod login;
pub mod prescriptions;
pub mod stock;

use serde_json::Value;
use shared::value::{compact_json, display_text, is_truthy};

/// Result of a create-style submission (bon, item, prescription).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created { id: String },
    /// The body lacked the expected identifier; shown as compact JSON.
    Unrecognized { body: String },
}

impl SubmitOutcome {
    pub fn from_body(body: &Value, id_field: &str) -> Self {
        match body.get(id_field) {
            Some(id) if is_truthy(id) => SubmitOutcome::Created {
                id: display_text(id),
            },
            _ => SubmitOutcome::Unrecognized {
                body: compact_json(body),
            },
        }
    }

    pub fn created_id(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Created { id } => Some(id),
            SubmitOutcome::Unrecognized { .. } => None,
        }
    }

    fn render(&self, created: impl FnOnce(&str) -> String) -> String {
        match self {
            SubmitOutcome::Created { id } => created(id),
            SubmitOutcome::Unrecognized { body } => body.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/controller_tests.rs"]
mod tests;
