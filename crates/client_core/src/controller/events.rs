//! Failure classification for the display surface.

use std::fmt;

use crate::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Auth,
    Transport,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    Dashboard,
    Bon,
    Stock,
    Items,
    Prescriptions,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_client_error(context: UiErrorContext, err: &ClientError) -> Self {
        let category = match err {
            ClientError::Unauthorized => UiErrorCategory::Auth,
            ClientError::Transport(_) => UiErrorCategory::Transport,
            ClientError::Decode(_) | ClientError::UnexpectedResponse(_) => {
                UiErrorCategory::Validation
            }
            ClientError::Store(_) => UiErrorCategory::Unknown,
        };
        Self {
            category,
            context,
            message: err.to_string(),
        }
    }

    pub fn requires_reauth(&self) -> bool {
        self.category == UiErrorCategory::Auth
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn category_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Auth => "Authentication",
        UiErrorCategory::Transport => "Transport",
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

fn context_label(context: UiErrorContext) -> &'static str {
    match context {
        UiErrorContext::Dashboard => "loading dashboard",
        UiErrorContext::Bon => "submitting bon",
        UiErrorContext::Stock => "loading central stock",
        UiErrorContext::Items => "creating item",
        UiErrorContext::Prescriptions => "saving prescription",
    }
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} error while {}: {}",
            category_label(self.category),
            context_label(self.context),
            self.message
        )
    }
}

#[cfg(test)]
#[path = "../tests/events_tests.rs"]
mod tests;
