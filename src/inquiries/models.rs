use chrono::{DateTime, Utc};
use crudcrate::{CRUDResource, EntityToModels};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, entity::prelude::*};
use uuid::Uuid;

/// The four service lines the website takes inquiries for. Stored as a
/// Postgres enum; the notification templates map each line to its
/// human-readable label.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, ToSchema, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "service_line")]
#[serde(rename_all = "snake_case")]
pub enum ServiceLine {
    #[sea_orm(string_value = "csr")]
    Csr,
    #[sea_orm(string_value = "team_building")]
    TeamBuilding,
    #[sea_orm(string_value = "corporate_event")]
    CorporateEvent,
    #[sea_orm(string_value = "training_program")]
    TrainingProgram,
}

impl ServiceLine {
    pub fn label(self) -> &'static str {
        match self {
            ServiceLine::Csr => "CSR Event",
            ServiceLine::TeamBuilding => "Team Building",
            ServiceLine::CorporateEvent => "Corporate Event",
            ServiceLine::TrainingProgram => "Training Program",
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, EntityToModels)]
#[sea_orm(table_name = "inquiries")]
#[crudcrate(
    generate_router,
    api_struct = "Inquiry",
    name_singular = "inquiry",
    name_plural = "inquiries",
    description = "Inquiries are submitted by website visitors for one of the four service lines and worked through by the operations team.",
    fn_get_all = get_all_inquiries,
)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[crudcrate(primary_key, update_model = false, create_model = false, on_create = Uuid::new_v4())]
    pub id: Uuid,
    #[crudcrate(sortable, filterable, enum_field)]
    pub service: ServiceLine,
    #[sea_orm(column_type = "Text")]
    #[crudcrate(sortable, filterable, fulltext)]
    pub contact_name: String,
    #[sea_orm(column_type = "Text", nullable)]
    #[crudcrate(sortable, filterable, fulltext)]
    pub company: Option<String>,
    #[sea_orm(column_type = "Text")]
    #[crudcrate(sortable, filterable, fulltext)]
    pub email: String,
    #[sea_orm(column_type = "Text", nullable)]
    #[crudcrate(filterable)]
    pub phone: Option<String>,
    #[crudcrate(sortable, filterable)]
    pub event_date: Option<Date>,
    #[crudcrate(sortable, filterable)]
    pub participant_count: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    #[crudcrate(filterable, fulltext)]
    pub location: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    #[crudcrate(fulltext, list_model = false)]
    pub message: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    #[crudcrate(filterable, list_model = false)]
    pub training_topic: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    #[crudcrate(filterable, list_model = false)]
    pub training_audience: Option<String>,
    #[sea_orm(column_type = "Text")]
    #[crudcrate(sortable, filterable, create_model = false, on_create = String::from("new"))]
    pub status: String,
    #[crudcrate(update_model = false, create_model = false, on_create = chrono::Utc::now(), sortable)]
    pub created_at: DateTime<Utc>,
    #[crudcrate(update_model = false, create_model = false, on_update = chrono::Utc::now(), on_create = chrono::Utc::now(), sortable, list_model=false)]
    pub last_updated: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Custom `get_all` that shows the operations team the newest inquiries first
async fn get_all_inquiries(
    db: &DatabaseConnection,
    condition: &sea_orm::Condition,
    order_column: Column,
    order_direction: sea_orm::Order,
    offset: u64,
    limit: u64,
) -> Result<Vec<InquiryList>, DbErr> {
    let models = Entity::find()
        .filter(condition.clone())
        .order_by_desc(Column::CreatedAt)
        .order_by(order_column, order_direction)
        .offset(offset)
        .limit(limit)
        .all(db)
        .await?;

    Ok(models.into_iter().map(InquiryList::from).collect())
}
