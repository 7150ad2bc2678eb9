pub mod services;

pub use services::{
    CallbackPayload, Ipay88Client, PaymentVerifier, VerificationRequest, VerificationResult,
};
