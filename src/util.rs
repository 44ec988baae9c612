use std::time::Duration;

/// Create an HTTP client with common settings for upstream calls
pub fn upstream_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("Failed to build HTTP client")
}
