use super::gateway_trait::{PaymentVerifier, VerificationRequest, VerificationResult};
use crate::config::Ipay88Config;
use crate::core::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// iPay88 verification API client
///
/// Holds one `reqwest::Client` so worker threads share its connection pool.
/// No timeout is set beyond reqwest's defaults and nothing is retried.
pub struct Ipay88Client {
    client: Client,
    verify_url: String,
}

impl Ipay88Client {
    /// Create a new iPay88 client
    ///
    /// # Arguments
    /// * `base_url` - gateway host, e.g. `https://sandbox.ipay88.com.my`
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client on top of a preconfigured `reqwest::Client`
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            verify_url: format!("{}/payment/verify", base_url.trim_end_matches('/')),
        }
    }

    pub fn from_config(config: &Ipay88Config) -> Self {
        Self {
            client: Client::new(),
            verify_url: config.verify_url(),
        }
    }

    pub fn verify_url(&self) -> &str {
        &self.verify_url
    }
}

#[async_trait]
impl PaymentVerifier for Ipay88Client {
    async fn verify_payment(&self, request: &VerificationRequest) -> Result<VerificationResult> {
        let response = self
            .client
            .post(&self.verify_url)
            .header("Accept", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    AppError::gateway(format!(
                        "iPay88 gateway unavailable: {} ({})",
                        if e.is_timeout() {
                            "timeout"
                        } else {
                            "connection failed"
                        },
                        e
                    ))
                } else {
                    AppError::gateway(format!("iPay88 verification request failed: {}", e))
                }
            })?;

        let status_code = response.status();
        let response_body = response
            .text()
            .await
            .map_err(|e| AppError::gateway(format!("Failed to read iPay88 response: {}", e)))?;

        if !status_code.is_success() {
            return Err(AppError::gateway(format!(
                "iPay88 API error - HTTP {} ({})",
                status_code.as_u16(),
                response_body
            )));
        }

        let response: Value = serde_json::from_str(&response_body)
            .map_err(|e| AppError::gateway(format!("Failed to parse iPay88 response: {}", e)))?;

        Ok(VerificationResult::from_response(response))
    }

    fn name(&self) -> &str {
        "ipay88"
    }
}
