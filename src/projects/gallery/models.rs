use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Gallery rows are owned by their project: the set is deleted and
/// re-inserted whenever a project update carries a gallery payload, so
/// there is no standalone gallery router and row ids never outlive an
/// update.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "project_gallery")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub project_id: Option<Uuid>,
    #[sea_orm(column_type = "Text")]
    pub url: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub alt: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::projects::models::Entity",
        from = "Column::ProjectId",
        to = "crate::projects::models::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Projects,
}

impl Related<crate::projects::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// API shape of a gallery image, used in project payloads and responses
/// alike. Because the set is replaced wholesale, clients never address an
/// individual row and no id is exposed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GalleryImage {
    pub url: String,
    pub alt: Option<String>,
    /// Falls back to the image's position in the submitted array
    pub display_order: Option<i32>,
}

impl From<Model> for GalleryImage {
    fn from(model: Model) -> Self {
        Self {
            url: model.url,
            alt: model.alt,
            display_order: Some(model.display_order),
        }
    }
}
