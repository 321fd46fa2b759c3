//! HBNB Core Library
//!
//! The storage port shared by every backend, its error type, and the
//! password encoding applied to user records before they are stored.

// Re-export record types from hbnb-types
pub use hbnb_types::*;

pub mod error;
pub mod password;
pub mod ports;

pub use error::{Result, StorageError};
pub use ports::{Objects, Store};
