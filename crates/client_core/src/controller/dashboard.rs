use serde_json::Value;
use shared::{
    protocol::{DashboardSummary, LowStockItem, DASHBOARD_PATH},
    value::{display_text, text_or},
};
use tracing::warn;

use crate::{api::ApiClient, error::ClientError, navigation::Page};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardView {
    pub central_items: String,
    pub pending_bons: String,
    pub low_stock: Vec<String>,
}

pub struct DashboardController {
    api: ApiClient,
}

impl DashboardController {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn load(&self) -> Result<DashboardView, ClientError> {
        let body = self.api.get(DASHBOARD_PATH).await?;
        Ok(dashboard_view(&body))
    }

    /// Ends the session locally whatever the server or the session store say.
    pub async fn logout(&self) {
        if let Err(err) = self.api.logout().await {
            warn!(error = %err, "logout request failed; clearing session anyway");
        }
        if let Err(err) = self.api.session().clear() {
            warn!(error = %err, "failed to clear session on logout");
        }
        self.api.navigator().navigate(Page::Login);
    }
}

/// A body that is not a summary object renders as an empty dashboard.
pub fn dashboard_view(body: &Value) -> DashboardView {
    let summary: DashboardSummary = serde_json::from_value(body.clone()).unwrap_or_default();

    let low_stock = match &summary.low_stock {
        Value::Array(items) => items.iter().map(low_stock_line).collect(),
        _ => Vec::new(),
    };

    DashboardView {
        central_items: display_text(&summary.central_items),
        pending_bons: display_text(&summary.pending_bons),
        low_stock,
    }
}

/// `"{name} — {qty} {unit} (seuil {seuil_min})"`, zero/empty for missing fields.
pub fn low_stock_line(item: &Value) -> String {
    let item: LowStockItem = serde_json::from_value(item.clone()).unwrap_or_default();
    format!(
        "{} — {} {} (seuil {})",
        display_text(&item.name),
        text_or(&item.qty, "0"),
        text_or(&item.unit, ""),
        text_or(&item.seuil_min, "0"),
    )
}
