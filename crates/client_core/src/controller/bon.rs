use shared::protocol::{created_id, BonRequest, BON_PATH};
use tracing::info;

use super::SubmitOutcome;
use crate::{api::ApiClient, error::ClientError, forms::LineRows};

/// Purchase-order form: a list of editable rows and a submit action.
pub struct BonController {
    api: ApiClient,
    rows: LineRows,
}

impl BonController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            rows: LineRows::new(),
        }
    }

    pub fn rows(&self) -> &LineRows {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut LineRows {
        &mut self.rows
    }

    pub fn payload(&self) -> BonRequest {
        BonRequest {
            items: self.rows.collect(),
        }
    }

    pub async fn submit(&self) -> Result<SubmitOutcome, ClientError> {
        let request = self.payload();
        info!(
            rows = self.rows.len(),
            lines = request.items.len(),
            "submitting bon"
        );
        let body = self.api.post(BON_PATH, &request).await?;
        Ok(SubmitOutcome::from_body(&body, created_id::BON))
    }
}

pub fn bon_message(outcome: &SubmitOutcome) -> String {
    outcome.render(|id| format!("Bon créé: {id}"))
}
