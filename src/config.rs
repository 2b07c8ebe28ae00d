use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Arogya";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default translation service endpoint (LibreTranslate-compatible).
pub const DEFAULT_TRANSLATE_URL: &str = "http://localhost:5000";

/// Per-request timeout for the translation service. Sentence fragments are
/// short, so a slow local service should fail fast rather than stall chat.
pub const TRANSLATE_TIMEOUT_SECS: u64 = 10;

/// Environment variable that overrides the translation endpoint.
pub const TRANSLATE_URL_ENV: &str = "AROGYA_TRANSLATE_URL";

/// Get the application data directory
/// ~/Arogya/ on all platforms (user-visible by design)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Arogya")
}

/// Path of the SQLite database file
pub fn database_path() -> PathBuf {
    app_data_dir().join("arogya.db")
}

/// Default log filter when RUST_LOG is unset
pub fn default_log_filter() -> String {
    "info".to_string()
}
