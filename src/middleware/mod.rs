pub mod error_handler;
pub mod request_id;
pub mod session;

pub use error_handler::{json_config, query_config};
pub use request_id::{RequestId, REQUEST_ID_HEADER};
pub use session::SessionContext;
