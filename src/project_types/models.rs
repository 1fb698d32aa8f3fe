use chrono::{DateTime, Utc};
use crudcrate::{CRUDResource, EntityToModels};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, entity::prelude::*};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, EntityToModels)]
#[sea_orm(table_name = "project_types")]
#[crudcrate(
    generate_router,
    api_struct = "ProjectType",
    name_singular = "project type",
    name_plural = "project types",
    description = "Project types label the service line a project belongs to. The website renders them in display order.",
    fn_get_all = get_all_project_types,
)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[crudcrate(primary_key, update_model = false, create_model = false, on_create = Uuid::new_v4())]
    pub id: Uuid,
    #[sea_orm(column_type = "Text", unique)]
    #[crudcrate(sortable, filterable, fulltext)]
    pub type_key: String,
    #[sea_orm(column_type = "Text", nullable)]
    #[crudcrate(filterable, fulltext)]
    pub description: Option<String>,
    #[crudcrate(sortable, filterable)]
    pub display_order: i32,
    #[crudcrate(update_model = false, create_model = false, on_create = chrono::Utc::now(), sortable, list_model=false)]
    pub created_at: DateTime<Utc>,
    #[crudcrate(update_model = false, create_model = false, on_update = chrono::Utc::now(), on_create = chrono::Utc::now(), sortable)]
    pub last_updated: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::projects::models::Entity")]
    Projects,
}

impl Related<crate::projects::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Custom `get_all` that keeps the website's display order stable
async fn get_all_project_types(
    db: &DatabaseConnection,
    condition: &sea_orm::Condition,
    order_column: Column,
    order_direction: sea_orm::Order,
    offset: u64,
    limit: u64,
) -> Result<Vec<ProjectTypeList>, DbErr> {
    let models = Entity::find()
        .filter(condition.clone())
        .order_by_asc(Column::DisplayOrder)
        .order_by(order_column, order_direction)
        .offset(offset)
        .limit(limit)
        .all(db)
        .await?;

    Ok(models.into_iter().map(ProjectTypeList::from).collect())
}
