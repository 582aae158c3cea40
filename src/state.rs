use crate::domain::error::VarNameError;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::client::ChatTranslator;
use crate::infrastructure::network::http::create_client;
use crate::presentation::locale::Messages;
use reqwest::Client;
use std::time::Duration;

/// Everything one invocation needs, built once from the loaded config.
pub struct AppState {
    pub config: Config,
    pub messages: Messages,
    pub http_client: Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, VarNameError> {
        let http_client = create_client(Duration::from_secs(config.timeout_secs))?;
        let messages = Messages::from_locale(&config.locale);

        Ok(Self {
            config,
            messages,
            http_client,
        })
    }

    pub fn translator(&self) -> ChatTranslator {
        ChatTranslator::new(self.http_client.clone(), self.config.clone())
    }
}
