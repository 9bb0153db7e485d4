// src/state.rs
use std::sync::Arc;

use reqwest::Client;

use crate::config::RelayConfig;
use crate::error::AppError;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: RelayConfig,
    pub http: Client,
}

impl AppState {
    pub fn new(config: RelayConfig) -> Result<Self, AppError> {
        let http = Client::builder()
            .user_agent(concat!("mmuni-api/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { config, http })
    }
}
