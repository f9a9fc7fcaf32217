//! Request and error types used by the server.

pub mod error;
pub mod request;

pub use error::*;
pub use request::*;
