//! Stack Analyzer server — HTTP API and CLI around the analyzer core.

pub mod config;
pub mod transport;
pub mod types;

pub use config::resolve_listen_addr;
pub use transport::HttpTransport;
