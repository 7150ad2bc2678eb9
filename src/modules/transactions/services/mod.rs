pub mod callback_handler;

pub use callback_handler::{CallbackHandler, CallbackOutcome};
