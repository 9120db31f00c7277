use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::LineItem;

pub const LOGIN_PATH: &str = "/api/login";
pub const LOGOUT_PATH: &str = "/api/logout";
pub const DASHBOARD_PATH: &str = "/api/dashboard";
pub const BON_PATH: &str = "/api/bon";
pub const CENTRAL_STOCK_PATH: &str = "/api/stock/central";
pub const ITEMS_PATH: &str = "/api/items";
pub const PRESCRIPTIONS_PATH: &str = "/api/prescriptions";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `{token}` on success, `{error}` otherwise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Value,
    #[serde(default)]
    pub error: Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(default)]
    pub central_items: Value,
    #[serde(default)]
    pub pending_bons: Value,
    #[serde(default)]
    pub low_stock: Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LowStockItem {
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub qty: Value,
    #[serde(default)]
    pub unit: Value,
    #[serde(default)]
    pub seuil_min: Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StockRow {
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub qty: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonRequest {
    pub items: Vec<LineItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub dosage: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRef {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrescriptionRequest {
    pub patient: PatientRef,
    pub doctor_name: String,
    pub items: Vec<LineItem>,
}

/// Field carrying the identifier of a created resource, per endpoint.
pub mod created_id {
    pub const BON: &str = "bonId";
    pub const ITEM: &str = "id";
    pub const PRESCRIPTION: &str = "prescription_id";
}
