use std::{
    fmt,
    sync::{Mutex, PoisonError},
};

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Dashboard,
}

impl Page {
    pub fn document(self) -> &'static str {
        match self {
            Page::Login => "index.html",
            Page::Dashboard => "dashboard.html",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.document())
    }
}

/// Moves the display surface to another page.
pub trait Navigator: Send + Sync {
    fn navigate(&self, page: Page);
}

/// Navigator that only records where the client was sent.
#[derive(Debug, Default)]
pub struct NavigationLog {
    history: Mutex<Vec<Page>>,
}

impl NavigationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Page> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .copied()
    }

    pub fn history(&self) -> Vec<Page> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for NavigationLog {
    fn navigate(&self, page: Page) {
        debug!(page = %page, "navigate");
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(page);
    }
}
