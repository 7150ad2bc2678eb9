pub mod gateway_trait;
pub mod ipay88;

pub use gateway_trait::{
    CallbackPayload, PaymentVerifier, VerificationRequest, VerificationResult,
};
pub use ipay88::Ipay88Client;
