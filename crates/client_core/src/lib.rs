//! Client for the Pharmacis inventory and prescription API.
//!
//! [`ApiClient`] wraps every call with the session token and handles expired
//! sessions; the [`controller`] modules turn page actions into view models
//! without knowing how they are displayed.

pub mod api;
pub mod controller;
pub mod error;
pub mod forms;
pub mod navigation;
pub mod session;

pub use api::ApiClient;
pub use controller::{
    bon::BonController, dashboard::DashboardController, items::ItemsController,
    login::LoginController, login::LoginOutcome, prescriptions::PrescriptionController,
    stock::StockController, SubmitOutcome,
};
pub use error::ClientError;
pub use forms::{LineRow, LineRows, RowField, RowId};
pub use navigation::{NavigationLog, Navigator, Page};
pub use session::{FileStore, MemoryStore, Session, SessionStore, StoreError};

/// API base URL baked into release builds.
pub const DEFAULT_API_BASE: &str = "https://pharmacis-api.ferhathamza17.workers.dev";

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
