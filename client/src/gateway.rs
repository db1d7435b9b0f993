//! Submission gateway for the analysis service
//!
//! Performs the single multipart `POST /analyze` call: three binary file
//! parts plus the preferences serialized as a JSON text part. Every failure
//! mode is normalized into an [`AnalysisError`] at this boundary.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::{debug, error, info};

use crate::config::ApiConfig;
use crate::error::{AnalysisError, GatewayResult};
use crate::stores::{FileSelection, FileSlot};
use synergyfit_shared::models::UserPreferences;
use synergyfit_shared::types::{AnalysisResult, ErrorBody};

/// Multipart field carrying the preferences JSON
const PREFERENCES_FIELD: &str = "user_preferences_json";

/// The seam between the lifecycle controller and the network
///
/// Implemented over HTTP by [`AnalysisGateway`]; tests substitute a stub.
#[async_trait]
pub trait AnalysisApi: Send + Sync {
    /// Submit the staged files and preferences, returning the decoded result
    async fn submit(
        &self,
        files: &FileSelection,
        prefs: &UserPreferences,
    ) -> GatewayResult<AnalysisResult>;
}

#[async_trait]
impl<A: AnalysisApi + ?Sized> AnalysisApi for std::sync::Arc<A> {
    async fn submit(
        &self,
        files: &FileSelection,
        prefs: &UserPreferences,
    ) -> GatewayResult<AnalysisResult> {
        (**self).submit(files, prefs).await
    }
}

/// HTTP gateway to the analysis service
///
/// The base URL is injected once at construction and immutable thereafter.
pub struct AnalysisGateway {
    http: reqwest::Client,
    base_url: String,
}

impl AnalysisGateway {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full URL of the analyze endpoint
    pub fn endpoint(&self) -> String {
        format!("{}/analyze", self.base_url)
    }

    fn build_form(
        files: &FileSelection,
        prefs: &UserPreferences,
    ) -> GatewayResult<Form> {
        let prefs_json = serde_json::to_string(prefs)
            .map_err(|e| AnalysisError::RequestSetup(format!("preferences encoding: {e}")))?;

        let mut form = Form::new();
        for slot in FileSlot::ALL {
            // submit() has already rejected incomplete selections
            let file = files.get(slot).ok_or_else(|| {
                AnalysisError::Validation(slot.label().to_string())
            })?;
            let part = Part::bytes(file.content.clone()).file_name(file.name.clone());
            form = form.part(slot.field_name(), part);
        }
        Ok(form.text(PREFERENCES_FIELD, prefs_json))
    }
}

#[async_trait]
impl AnalysisApi for AnalysisGateway {
    async fn submit(
        &self,
        files: &FileSelection,
        prefs: &UserPreferences,
    ) -> GatewayResult<AnalysisResult> {
        let missing = files.missing_slots();
        if !missing.is_empty() {
            let labels: Vec<&str> = missing.iter().map(|slot| slot.label()).collect();
            return Err(AnalysisError::Validation(labels.join(", ")));
        }

        let endpoint = self.endpoint();
        let form = Self::build_form(files, prefs)?;

        info!(endpoint = %endpoint, "Submitting analysis request");

        let response = self
            .http
            .post(&endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!(endpoint = %endpoint, "Analysis request failed to reach the service: {e}");
                AnalysisError::Network {
                    endpoint: endpoint.clone(),
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body: ErrorBody = response.json().await.unwrap_or_default();
            let message = body.surfaced_message().to_string();
            error!(status = status.as_u16(), message = %message, "Analysis request rejected");
            return Err(AnalysisError::Server {
                status: status.as_u16(),
                message,
            });
        }

        debug!(status = status.as_u16(), "Decoding analysis response");
        let result = response
            .json::<AnalysisResult>()
            .await
            .map_err(|e| AnalysisError::Decode(e.to_string()))?;

        info!(
            exercises = result.workout_progression.len(),
            recommendations = result.general_recommendations.len(),
            "Analysis completed"
        );
        Ok(result)
    }
}
