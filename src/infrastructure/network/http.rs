// HTTP client utilities
use crate::domain::error::VarNameError;
use reqwest::Client;
use std::time::Duration;

/// Create the HTTP client used for chat-completion calls
///
/// `timeout` bounds the whole request; hitting it surfaces as a timeout
/// failure rather than a hang.
pub fn create_client(timeout: Duration) -> Result<Client, VarNameError> {
    Ok(Client::builder()
        .pool_max_idle_per_host(2)
        .pool_idle_timeout(Duration::from_secs(30))
        .timeout(timeout)
        .user_agent(concat!("varname/", env!("CARGO_PKG_VERSION")))
        .build()?)
}
