use crate::notifications::mailer::EmailSettings;
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;

/// Admin role name in Keycloak
pub const ADMIN_ROLE: &str = "atrium-admin";

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub db_url: Option<String>,
    pub app_name: String,
    pub keycloak_ui_id: String,
    pub keycloak_url: String,
    pub keycloak_realm: String,
    pub deployment: String,
    pub admin_role: String,
    pub email: Option<EmailSettings>,
    pub tests_running: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok(); // Load from .env file if available
        let db_url = env::var("DB_URL").ok().or_else(|| {
            Some(format!(
                "{}://{}:{}@{}:{}/{}",
                env::var("DB_PREFIX").unwrap_or_else(|_| "postgresql".to_string()),
                env::var("DB_USER").expect("DB_USER must be set"),
                env::var("DB_PASSWORD").expect("DB_PASSWORD must be set"),
                env::var("DB_HOST").expect("DB_HOST must be set"),
                env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string()),
                env::var("DB_NAME").expect("DB_NAME must be set"),
            ))
        });

        Config {
            app_name: env::var("APP_NAME").expect("APP_NAME must be set"),
            keycloak_ui_id: env::var("KEYCLOAK_UI_ID").expect("KEYCLOAK_UI_ID must be set"),
            keycloak_url: env::var("KEYCLOAK_URL").expect("KEYCLOAK_URL must be set"),
            keycloak_realm: env::var("KEYCLOAK_REALM").expect("KEYCLOAK_REALM must be set"),
            deployment: env::var("DEPLOYMENT")
                .expect("DEPLOYMENT must be set, this can be local, dev, stage, or prod"),
            admin_role: ADMIN_ROLE.to_string(),
            // None when SMTP_HOST is absent; panics on a half-configured
            // mail setup so the process never serves traffic that way.
            email: EmailSettings::from_env(),
            tests_running: false,
            db_url,
        }
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            app_name: "atrium-api-test".to_string(),
            keycloak_ui_id: "test-ui".to_string(),
            keycloak_url: "http://localhost:8080".to_string(),
            keycloak_realm: "test-realm".to_string(),
            deployment: "test".to_string(),
            admin_role: ADMIN_ROLE.to_string(),
            email: None,
            tests_running: true,
            db_url: None,
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::routes::build_router;
    use axum::Router;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database, DatabaseConnection};

    /// Connect to a fresh in-memory SQLite database with the full schema
    /// applied. A single pooled connection keeps the in-memory database
    /// alive and shared for the lifetime of the test.
    pub async fn setup_test_db() -> DatabaseConnection {
        let mut options = ConnectOptions::new("sqlite::memory:".to_string());
        options.max_connections(1);

        let db = Database::connect(options)
            .await
            .expect("Failed to connect to test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run database migrations");

        db
    }

    pub async fn setup_test_app() -> Router {
        let db = setup_test_db().await;
        let mut config = Config::for_tests();
        // Disable Keycloak for tests by setting the URL to empty
        config.keycloak_url = String::new();
        build_router(&db, &config)
    }
}
