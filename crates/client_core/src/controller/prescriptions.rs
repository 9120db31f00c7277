use shared::protocol::{created_id, PatientRef, PrescriptionRequest, PRESCRIPTIONS_PATH};
use tracing::info;

use super::SubmitOutcome;
use crate::{api::ApiClient, error::ClientError, forms::LineRows};

pub struct PrescriptionController {
    api: ApiClient,
    rows: LineRows,
    pub patient_name: String,
    pub doctor_name: String,
}

impl PrescriptionController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            rows: LineRows::new(),
            patient_name: String::new(),
            doctor_name: String::new(),
        }
    }

    pub fn rows(&self) -> &LineRows {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut LineRows {
        &mut self.rows
    }

    pub fn payload(&self) -> PrescriptionRequest {
        PrescriptionRequest {
            patient: PatientRef {
                name: self.patient_name.clone(),
            },
            doctor_name: self.doctor_name.clone(),
            items: self.rows.collect(),
        }
    }

    pub async fn submit(&self) -> Result<SubmitOutcome, ClientError> {
        let request = self.payload();
        info!(lines = request.items.len(), "submitting prescription");
        let body = self.api.post(PRESCRIPTIONS_PATH, &request).await?;
        Ok(SubmitOutcome::from_body(&body, created_id::PRESCRIPTION))
    }
}

pub fn prescription_message(outcome: &SubmitOutcome) -> String {
    outcome.render(|id| format!("Saved: {id}"))
}
