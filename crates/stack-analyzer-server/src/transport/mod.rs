//! Transport layer for the analyzer API.

pub mod http;

pub use http::{router, HttpTransport, ServerState};
