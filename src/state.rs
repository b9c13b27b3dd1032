use log::info;

use crate::config::Config;
use crate::model::persona::{Persona, PersonaError};
use crate::model::GatewayClient;

/// Everything a request handler needs, built once at startup.
pub struct AppState {
    pub gateway: GatewayClient,
    pub system_prompt: String,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, PersonaError> {
        let persona = match &config.persona_path {
            Some(path) => Persona::load(path)?,
            None => Persona::default(),
        };
        let system_prompt = persona.render()?;
        info!("Persona prompt ready for {} ({} characters)", persona.name, system_prompt.len());

        Ok(Self {
            gateway: GatewayClient::new(config.upstream_url.clone(), config.api_key.clone()),
            system_prompt,
        })
    }
}
