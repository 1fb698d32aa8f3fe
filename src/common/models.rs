use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Web UI bootstrap configuration served to the admin frontend
#[derive(ToSchema, Deserialize, Serialize, Default)]
pub struct UIConfiguration {
    #[serde(rename = "clientId")]
    pub client_id: String,
    pub realm: String,
    pub url: String,
    pub deployment: String,
}

impl UIConfiguration {
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self {
            client_id: config.keycloak_ui_id.clone(),
            realm: config.keycloak_realm.clone(),
            url: config.keycloak_url.clone(),
            deployment: config.deployment.clone(),
        }
    }
}

#[derive(ToSchema, Deserialize, Serialize)]
pub struct HealthCheck {
    pub status: String,
}
