//! Application Endpoints

use serde::Serialize;
use serde_json::Value;

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{sort_newest_first, Application, ValidationReport};

#[derive(Serialize)]
struct ForwardArgs {
    application_id: u32,
    action: &'static str,
}

impl ApiClient {
    /// All applications visible to the LIU, newest (highest id) first
    pub async fn list_applications(&self) -> ApiResult<Vec<Application>> {
        let response = self.get("/arms/liu-applications").send().await?;
        let mut apps: Vec<Application> = Self::parse_envelope(response, "application list")
            .await?
            .unwrap_or_default();
        sort_newest_first(&mut apps);
        log::debug!("fetched {} applications", apps.len());
        Ok(apps)
    }

    /// Validation reports filed by police stations
    pub async fn list_validation_reports(&self) -> ApiResult<Vec<ValidationReport>> {
        let response = self
            .post("/validation-report/list-ps")
            .header("Content-Type", "application/json")
            .send()
            .await?;
        Ok(Self::parse_envelope(response, "validation report list")
            .await?
            .unwrap_or_default())
    }

    pub async fn delete_application(&self, id: u32) -> ApiResult<()> {
        let response = self
            .delete(&format!("/arms/application/{}", id))
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    /// Hand the application over to the DCRB stage
    pub async fn forward_to_dcrb(&self, id: u32) -> ApiResult<()> {
        let args = ForwardArgs {
            application_id: id,
            action: "forward_to_dcrb",
        };
        let response = self.post("/arms/forward-to-sdm-ps").json(&args).send().await?;
        Self::parse_envelope::<Value>(response, "DCRB forward").await?;
        Ok(())
    }
}
