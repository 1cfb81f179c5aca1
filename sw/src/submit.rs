//! Submission client
//!
//! Builds the outgoing payload (every answer field plus the computed badge
//! and the shared secret) and POSTs it to the sheet store endpoint. The
//! submission is all-or-nothing with no retries. Unlike a pure
//! fire-and-forget transport, the client inspects the store's JSON
//! response when one comes back and surfaces a reported error instead of
//! treating "the request didn't throw" as success.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::answers::AnswerSet;
use crate::badge::Badge;
use crate::config::Config;

/// Request timeout; one shot, no retries
const SUBMIT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("payload encode: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// Response body the sheet store sends back
#[derive(Debug, Deserialize)]
struct StoreResponse {
    status: String,
    message: Option<String>,
}

pub struct SubmitClient {
    http: Client,
    endpoint: String,
    secret: String,
}

impl SubmitClient {
    pub fn new(config: &Config) -> Result<Self, SubmitError> {
        debug!(endpoint = %config.endpoint, "SubmitClient::new");
        let http = Client::builder().timeout(SUBMIT_TIMEOUT).build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            secret: config.secret.clone(),
        })
    }

    /// Build the JSON body: every answer field, the badge label, and `_secret`
    pub fn payload(&self, answers: &AnswerSet, badge: Badge) -> Result<Value, SubmitError> {
        let mut body = serde_json::to_value(answers)?;
        body["badge"] = Value::String(badge.label().to_string());
        body["_secret"] = Value::String(self.secret.clone());
        Ok(body)
    }

    /// Submit the finished answers; Ok(()) only if the store accepted them
    pub async fn submit(&self, answers: &AnswerSet, badge: Badge) -> Result<(), SubmitError> {
        let body = self.payload(answers, badge)?;
        debug!(endpoint = %self.endpoint, "SubmitClient::submit: sending");

        let response = self.http.post(&self.endpoint).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, "SubmitClient::submit: non-success status");
            return Err(SubmitError::Rejected(format!("endpoint returned {}", status)));
        }

        // The store answers HTTP 200 for rejections too, with a status body
        match response.json::<StoreResponse>().await {
            Ok(outcome) if outcome.status == "error" => {
                let message = outcome.message.unwrap_or_else(|| "unknown error".to_string());
                warn!(%message, "SubmitClient::submit: store rejected submission");
                Err(SubmitError::Rejected(message))
            }
            Ok(_) => {
                info!("SubmitClient::submit: accepted");
                Ok(())
            }
            Err(e) => {
                // No parseable body; the request itself succeeded
                debug!(error = %e, "SubmitClient::submit: no status body, assuming success");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{ScalarField, SetField};

    fn client() -> SubmitClient {
        let mut config = Config::default();
        config.secret = "testsecret".to_string();
        SubmitClient::new(&config).unwrap()
    }

    #[test]
    fn test_payload_carries_every_field_plus_secret_and_badge() {
        let mut answers = AnswerSet::default();
        answers.set(ScalarField::Age, "18");
        answers.toggle(SetField::Mission, "cleanup");
        answers.toggle(SetField::Mission, "feed");
        answers.set_prize_draw(true);

        let payload = client().payload(&answers, Badge::Trailblazer).unwrap();

        assert_eq!(payload["age"], "18");
        assert_eq!(payload["badge"], "Trailblazer");
        assert_eq!(payload["_secret"], "testsecret");
        assert_eq!(payload["prizeDrawEntry"], true);
        let mission: Vec<&str> = payload["mission"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(mission, vec!["cleanup", "feed"]);
        // Untouched fields are still present (empty), never omitted
        assert_eq!(payload["gender"], "");
        assert_eq!(payload["lifeSkills"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_payload_field_count_matches_schema() {
        let payload = client().payload(&AnswerSet::default(), Badge::Worshipper).unwrap();
        // 16 answer fields + badge + _secret
        assert_eq!(payload.as_object().unwrap().len(), 18);
    }
}
