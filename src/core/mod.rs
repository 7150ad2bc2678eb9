pub mod currency;
pub mod error;

pub use currency::{Currency, MinorUnits};
pub use error::{AppError, Result};
