use super::models::{Project, ProjectCreate, ProjectList, ProjectUpdate};
use crate::common::auth::Role;
use crate::common::errors::{BusinessError, DbErrorExt};
use crate::common::state::AppState;
use axum::routing::get;
use axum_keycloak_auth::{PassthroughMode, layer::KeycloakAuthLayer};
use crudcrate::{CRUDResource, crud_handlers};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use utoipa_axum::{router::OpenApiRouter, routes};

crud_handlers!(
    Project,
    ProjectUpdate,
    ProjectCreate,
    super::models::ProjectList
);

pub fn router(state: &AppState) -> OpenApiRouter
where
    Project: CRUDResource,
{
    // Reads stay public: the website fetches projects anonymously
    let public_router = OpenApiRouter::new()
        .routes(routes!(get_one_handler))
        .routes(routes!(get_all_handler))
        .route("/featured", get(get_featured_projects))
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
            Project::RESOURCE_NAME_PLURAL
        );
    }

    public_router.merge(mutating_router)
}

/// Get the active, featured projects in display order
#[utoipa::path(
    get,
    path = "/projects/featured",
    responses(
        (status = 200, description = "Featured projects in display order", body = Vec<ProjectList>),
        (status = 500, description = "Internal server error")
    ),
    tag = "projects",
    summary = "Get featured projects",
    description = "Retrieve the active, featured projects for the landing page, ordered for display."
)]
pub async fn get_featured_projects(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<ProjectList>>, BusinessError> {
    let models = super::models::Entity::find()
        .filter(super::models::Column::IsActive.eq(true))
        .filter(super::models::Column::IsFeatured.eq(true))
        .order_by_asc(super::models::Column::DisplayOrder)
        .all(&db)
        .await
        .map_err(|e| e.to_business_error("project"))?;

    let mut projects = Vec::new();
    for model in models {
        projects.push(
            super::models::build_project_list(&db, model)
                .await
                .map_err(|e| e.to_business_error("project"))?,
        );
    }

    Ok(Json(projects))
}
