pub mod request_id;

pub use request_id::{RequestId, REQUEST_ID_HEADER};
