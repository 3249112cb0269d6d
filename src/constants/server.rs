/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default path of the project/blink registry file.
pub const DEFAULT_CONFIG_FILE_PATH: &str = "config/config.json";

/// Time the server waits for in-flight requests on shutdown, in seconds.
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECONDS: u64 = 5;

/// Maximum length of project and blink identifiers.
pub const MAX_ID_LENGTH: u64 = 36;
