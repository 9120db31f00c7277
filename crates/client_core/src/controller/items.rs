use shared::protocol::{created_id, CreateItemRequest, ITEMS_PATH};
use tracing::info;

use super::SubmitOutcome;
use crate::{api::ApiClient, error::ClientError};

pub struct ItemsController {
    api: ApiClient,
}

impl ItemsController {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn create(&self, name: &str, dosage: &str) -> Result<SubmitOutcome, ClientError> {
        let request = CreateItemRequest {
            name: name.to_string(),
            dosage: dosage.to_string(),
        };
        let body = self.api.post(ITEMS_PATH, &request).await?;
        let outcome = SubmitOutcome::from_body(&body, created_id::ITEM);
        info!(created = outcome.created_id().is_some(), "item submitted");
        Ok(outcome)
    }
}

pub fn item_message(outcome: &SubmitOutcome) -> String {
    outcome.render(|id| format!("Created id {id}"))
}
