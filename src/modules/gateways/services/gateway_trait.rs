use crate::core::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Server-side payment verification against the gateway's API
#[async_trait]
pub trait PaymentVerifier: Send + Sync {
    /// Send one verification request and return the gateway's verdict.
    ///
    /// Transport failures, non-2xx answers and non-JSON bodies are errors;
    /// a JSON body with any `status` (or none) is a verdict.
    async fn verify_payment(&self, request: &VerificationRequest) -> Result<VerificationResult>;

    /// Get gateway name
    fn name(&self) -> &str;
}

/// Callback fields the gateway posts back to `/ipay88Response`
///
/// Values are kept as raw JSON so they are forwarded untouched, whatever
/// type the gateway chose for them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallbackPayload {
    pub order_id: Option<Value>,
    pub transaction_id: Option<Value>,
    pub amount: Option<Value>,
    pub status: Option<Value>,
}

/// Body of `POST /payment/verify`
///
/// Fields missing from the callback are left out of the JSON entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationRequest {
    pub merchant_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
}

impl VerificationRequest {
    pub fn from_callback(merchant_code: impl Into<String>, callback: CallbackPayload) -> Self {
        Self {
            merchant_code: merchant_code.into(),
            order_id: callback.order_id,
            transaction_id: callback.transaction_id,
            amount: callback.amount,
            status: callback.status,
        }
    }
}

/// Gateway verdict on a verification request
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationResult {
    /// `status` field of the response, when it is a string
    pub status: Option<String>,
}

impl VerificationResult {
    pub fn from_response(response: Value) -> Self {
        let status = response
            .get("status")
            .and_then(Value::as_str)
            .map(str::to_string);

        Self { status }
    }

    /// Only the exact string `"success"` counts as a confirmed payment
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }
}
