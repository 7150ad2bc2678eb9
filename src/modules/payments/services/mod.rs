pub mod redirect_form;
pub mod signature;

pub use redirect_form::{escape_attr, RedirectForm};
pub use signature::SignatureInput;
