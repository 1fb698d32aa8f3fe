use crate::common::state::AppState;
use crate::config::Config;
use crate::notifications::mailer::Mailer;
use axum::{Router, extract::DefaultBodyLimit};
use axum_keycloak_auth::{Url, instance::KeycloakAuthInstance, instance::KeycloakConfig};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

pub fn build_router(db: &DatabaseConnection, config: &Config) -> Router {
    #[derive(OpenApi)]
    #[openapi(
        modifiers(&SecurityAddon),
        security(
            ("bearerAuth" = [])
        )
    )]
    struct ApiDoc;

    struct SecurityAddon;

    impl utoipa::Modify for SecurityAddon {
        fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
            if let Some(components) = openapi.components.as_mut() {
                components.add_security_scheme(
                    "bearerAuth",
                    utoipa::openapi::security::SecurityScheme::Http(
                        utoipa::openapi::security::HttpBuilder::new()
                            .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                            .bearer_format("JWT")
                            .build(),
                    ),
                );
            }
        }
    }

    let keycloak_instance: Option<Arc<KeycloakAuthInstance>> = if config.keycloak_url.is_empty() {
        // Skip Keycloak initialization for tests
        None
    } else {
        Some(Arc::new(KeycloakAuthInstance::new(
            KeycloakConfig::builder()
                .server(Url::parse(&config.keycloak_url).unwrap())
                .realm(String::from(&config.keycloak_realm))
                .build(),
        )))
    };

    // One process-lifetime SMTP handle, shared by every dispatch call.
    // None means mail is not configured and dispatch endpoints answer 503.
    let mailer: Option<Arc<Mailer>> = config
        .email
        .clone()
        .map(|settings| Arc::new(Mailer::new(settings)));

    let app_state: AppState = AppState {
        db: db.clone(),
        config: config.clone(),
        keycloak_auth_instance: keycloak_instance,
        mailer,
    };

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(crate::common::views::router(&app_state)) // Root routes
        .nest("/api/projects", crate::projects::views::router(&app_state))
        .nest(
            "/api/project-types",
            crate::project_types::views::router(&app_state),
        )
        .nest(
            "/api/hero-images",
            crate::hero_images::views::router(&app_state),
        )
        .nest(
            "/api/client-logos",
            crate::client_logos::views::router(&app_state),
        )
        .nest("/api/inquiries", crate::inquiries::views::router(&app_state))
        .nest(
            "/api/notifications",
            crate::notifications::views::router(&app_state),
        )
        .layer(DefaultBodyLimit::max(2 * 1024 * 1024))
        .split_for_parts();

    router.merge(Scalar::with_url("/api/docs", api))
}
