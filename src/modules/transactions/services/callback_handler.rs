use crate::modules::gateways::{CallbackPayload, PaymentVerifier, VerificationRequest};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Relays gateway callbacks to the verification API
///
/// Every callback triggers exactly one verification call: there is no retry
/// and no deduplication of repeated callbacks.
#[derive(Clone)]
pub struct CallbackHandler {
    verifier: Arc<dyn PaymentVerifier>,
    merchant_code: String,
}

/// What the gateway said about a callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// Verification answered `status: "success"`
    Confirmed,
    /// Verification answered with any other status, or none
    Rejected { status: Option<String> },
    /// The verification call itself failed
    VerificationError { error: String },
}

impl CallbackHandler {
    pub fn new(verifier: Arc<dyn PaymentVerifier>, merchant_code: impl Into<String>) -> Self {
        Self {
            verifier,
            merchant_code: merchant_code.into(),
        }
    }

    pub async fn process_callback(&self, callback: CallbackPayload) -> CallbackOutcome {
        let request = VerificationRequest::from_callback(self.merchant_code.clone(), callback);

        info!(
            gateway = self.verifier.name(),
            order_id = ?request.order_id,
            transaction_id = ?request.transaction_id,
            "Verifying payment callback"
        );

        match self.verifier.verify_payment(&request).await {
            Ok(result) if result.is_success() => {
                info!(order_id = ?request.order_id, "Payment verified");
                CallbackOutcome::Confirmed
            }
            Ok(result) => {
                warn!(
                    order_id = ?request.order_id,
                    status = ?result.status,
                    "Payment verification rejected"
                );
                CallbackOutcome::Rejected {
                    status: result.status,
                }
            }
            Err(e) => {
                error!(order_id = ?request.order_id, error = %e, "Payment verification error");
                CallbackOutcome::VerificationError {
                    error: e.to_string(),
                }
            }
        }
    }
}
