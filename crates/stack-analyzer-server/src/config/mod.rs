//! Configuration loading and resolution.

/// Listen address used when neither the flag nor the env var is set.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3200";

/// Environment variable overriding the listen address.
pub const ADDR_ENV: &str = "STACK_ANALYZER_ADDR";

/// Resolve the listen address: explicit flag, then env var, then default.
pub fn resolve_listen_addr(explicit: Option<&str>) -> String {
    if let Some(addr) = explicit {
        return addr.to_string();
    }

    if let Ok(env_addr) = std::env::var(ADDR_ENV) {
        if !env_addr.trim().is_empty() {
            return env_addr.trim().to_string();
        }
    }

    DEFAULT_ADDR.to_string()
}
