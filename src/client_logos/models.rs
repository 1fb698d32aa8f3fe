use chrono::{DateTime, Utc};
use crudcrate::{CRUDResource, EntityToModels};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, entity::prelude::*};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, EntityToModels)]
#[sea_orm(table_name = "client_logos")]
#[crudcrate(
    generate_router,
    api_struct = "ClientLogo",
    name_singular = "client logo",
    name_plural = "client logos",
    description = "Client logos scroll through the trusted-by strip. Inactive rows stay in the table but are skipped by the website.",
    fn_get_all = get_all_client_logos,
)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[crudcrate(primary_key, update_model = false, create_model = false, on_create = Uuid::new_v4())]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    #[crudcrate(sortable, filterable, fulltext)]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    #[crudcrate(sortable, filterable)]
    pub url: String,
    #[crudcrate(filterable)]
    pub is_active: bool,
    #[crudcrate(sortable, filterable)]
    pub display_order: i32,
    #[crudcrate(update_model = false, create_model = false, on_create = chrono::Utc::now(), sortable, list_model=false)]
    pub created_at: DateTime<Utc>,
    #[crudcrate(update_model = false, create_model = false, on_update = chrono::Utc::now(), on_create = chrono::Utc::now(), sortable)]
    pub last_updated: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Custom `get_all` that keeps the logo strip order stable
async fn get_all_client_logos(
    db: &DatabaseConnection,
    condition: &sea_orm::Condition,
    order_column: Column,
    order_direction: sea_orm::Order,
    offset: u64,
    limit: u64,
) -> Result<Vec<ClientLogoList>, DbErr> {
    let models = Entity::find()
        .filter(condition.clone())
        .order_by_asc(Column::DisplayOrder)
        .order_by(order_column, order_direction)
        .offset(offset)
        .limit(limit)
        .all(db)
        .await?;

    Ok(models.into_iter().map(ClientLogoList::from).collect())
}
