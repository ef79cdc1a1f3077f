use std::net::SocketAddr;

/// Application-level constants
pub const APP_NAME: &str = "Symptomscope";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}

/// Address the HTTP API binds to.
/// Override with SYMPTOMSCOPE_ADDR (e.g. "0.0.0.0:8080").
pub fn bind_addr() -> SocketAddr {
    std::env::var("SYMPTOMSCOPE_ADDR")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 8787)))
}

/// Base URL of the local Ollama instance.
/// Override with SYMPTOMSCOPE_OLLAMA_URL.
pub fn ollama_base_url() -> String {
    std::env::var("SYMPTOMSCOPE_OLLAMA_URL")
        .unwrap_or_else(|_| "http://localhost:11434".to_string())
}

/// Model used for symptom analysis.
/// Override with SYMPTOMSCOPE_MODEL.
pub fn analysis_model() -> String {
    std::env::var("SYMPTOMSCOPE_MODEL").unwrap_or_else(|_| "medgemma".to_string())
}

/// Outbound request timeout for the model call, in seconds.
/// Override with SYMPTOMSCOPE_TIMEOUT_SECS. The analysis call is a single
/// attempt — this timeout is the only bound on it.
pub fn request_timeout_secs() -> u64 {
    std::env::var("SYMPTOMSCOPE_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(300)
}
