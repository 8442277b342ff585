pub mod error;
mod models;

pub use error::{DecodeError, HandlerError, StorageError};
pub use models::*;
