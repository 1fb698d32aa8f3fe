use super::models::{ProjectType, ProjectTypeCreate, ProjectTypeUpdate};
use crate::common::auth::Role;
use crate::common::state::AppState;
use axum_keycloak_auth::{PassthroughMode, layer::KeycloakAuthLayer};
use crudcrate::{CRUDResource, crud_handlers};
use sea_orm::ConnectionTrait;
use utoipa_axum::{router::OpenApiRouter, routes};

crud_handlers!(
    ProjectType,
    ProjectTypeUpdate,
    ProjectTypeCreate,
    super::models::ProjectTypeList
);

pub fn router(state: &AppState) -> OpenApiRouter
where
    ProjectType: CRUDResource,
{
    let public_router = OpenApiRouter::new()
        .routes(routes!(get_one_handler))
        .routes(routes!(get_all_handler))
        .with_state(state.db.clone());

    let mut mutating_router = OpenApiRouter::new()
        .routes(routes!(create_one_handler))
        .routes(routes!(update_one_handler))
        .routes(routes!(delete_one_handler))
        .routes(routes!(delete_many_handler))
        .with_state(state.db.clone());

    if let Some(instance) = state.keycloak_auth_instance.clone() {
        mutating_router = mutating_router.layer(
            KeycloakAuthLayer::<Role>::builder()
                .instance(instance)
                .passthrough_mode(PassthroughMode::Block)
                .persist_raw_claims(false)
                .expected_audiences(vec![String::from("account")])
                .required_roles(vec![Role::Administrator])
                .build(),
        );
    } else if !state.config.tests_running {
        println!(
            "Warning: Mutating routes of {} router are not protected",
            ProjectType::RESOURCE_NAME_PLURAL
        );
    }

    public_router.merge(mutating_router)
}
