pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{AmountInput, CheckoutDetails, CheckoutRequest};
pub use services::{RedirectForm, SignatureInput};
