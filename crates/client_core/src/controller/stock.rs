use serde_json::Value;
use shared::{
    protocol::{StockRow, CENTRAL_STOCK_PATH},
    value::{display_text, text_or},
};

use crate::{api::ApiClient, error::ClientError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLine {
    pub name: String,
    pub qty: String,
}

pub struct StockController {
    api: ApiClient,
}

impl StockController {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn load_central(&self) -> Result<Vec<StockLine>, ClientError> {
        let body = self.api.get(CENTRAL_STOCK_PATH).await?;
        stock_lines(&body)
    }
}

pub fn stock_lines(body: &Value) -> Result<Vec<StockLine>, ClientError> {
    let Value::Array(rows) = body else {
        return Err(ClientError::UnexpectedResponse(format!(
            "central stock: expected an array, got {body}"
        )));
    };
    Ok(rows
        .iter()
        .map(|row| {
            let row: StockRow = serde_json::from_value(row.clone()).unwrap_or_default();
            StockLine {
                name: display_text(&row.name),
                qty: text_or(&row.qty, "0"),
            }
        })
        .collect())
}
