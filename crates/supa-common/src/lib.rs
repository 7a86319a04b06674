pub mod errors;
pub mod id;

pub use errors::{ConfigError, SupaError};
pub use id::{new_id, SessionId};
