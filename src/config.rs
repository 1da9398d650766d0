use std::env;

/// Process-wide server configuration, read once at startup and passed into
/// the listen call. There is no other global state.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listening port, from the `PORT` environment variable. Default: 5000.
    pub port: u16,
    /// Debug mode, enabled with `DEBUG=1`. Raises the log level to DEBUG.
    /// Default: off.
    pub debug: bool,
}

pub const DEFAULT_PORT: u16 = 5000;

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary lookup function so tests do not have to
    /// mutate process-wide environment variables.
    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let port = get("PORT")
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let debug = get("DEBUG").map(|value| value == "1").unwrap_or(false);
        Self { port, debug }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            debug: false,
        }
    }
}
