pub mod checkout;

pub use checkout::{AmountInput, CheckoutDetails, CheckoutRequest};
