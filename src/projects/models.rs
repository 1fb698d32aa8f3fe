use super::gallery::models::GalleryImage;
use chrono::{DateTime, Utc};
use crudcrate::{CRUDResource, EntityToModels, traits::MergeIntoActiveModel};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, IntoActiveModel,
    QueryOrder, QuerySelect, TransactionTrait, entity::prelude::*,
};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, EntityToModels)]
#[sea_orm(table_name = "projects")]
#[crudcrate(
    generate_router,
    api_struct = "Project",
    name_singular = "project",
    name_plural = "projects",
    description = "Projects showcase past events on the website. Each project carries an ordered image gallery and an optional project type.",
    fn_get_one = get_one_project,
    fn_get_all = get_all_projects,
    fn_create = create_project_with_gallery,
    fn_update = update_project_with_gallery,
)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[crudcrate(primary_key, update_model = false, create_model = false, on_create = Uuid::new_v4())]
    pub id: Uuid,
    #[sea_orm(column_type = "Text", unique)]
    #[crudcrate(sortable, filterable, fulltext)]
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    #[crudcrate(sortable, filterable, fulltext)]
    pub category: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    #[crudcrate(filterable, fulltext, list_model = false)]
    pub summary: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    #[crudcrate(filterable, fulltext, list_model = false)]
    pub description: Option<String>,
    #[crudcrate(sortable, filterable)]
    pub year: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    #[crudcrate(sortable, filterable, fulltext)]
    pub client: Option<String>,
    #[crudcrate(sortable, filterable)]
    pub display_order: i32,
    #[crudcrate(filterable)]
    pub is_active: bool,
    #[crudcrate(filterable)]
    pub is_featured: bool,
    #[crudcrate(sortable, filterable)]
    pub project_type_id: Option<Uuid>,
    #[crudcrate(update_model = false, create_model = false, on_create = chrono::Utc::now(), sortable, list_model=false)]
    pub created_at: DateTime<Utc>,
    #[crudcrate(update_model = false, create_model = false, on_update = chrono::Utc::now(), on_create = chrono::Utc::now(), sortable)]
    pub last_updated: DateTime<Utc>,
    /// The ordered gallery set. Present in every response; in a create or
    /// update payload `None` leaves the set untouched while `[]` clears it.
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None)]
    pub gallery: Option<Vec<GalleryImage>>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, create_model = false, update_model = false)]
    pub project_type_key: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::projects::gallery::models::Entity")]
    Gallery,
    #[sea_orm(
        belongs_to = "crate::project_types::models::Entity",
        from = "Column::ProjectTypeId",
        to = "crate::project_types::models::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    ProjectTypes,
}

impl Related<crate::projects::gallery::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gallery.def()
    }
}

impl Related<crate::project_types::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectTypes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Load the ordered gallery set for a project
async fn load_gallery<C: sea_orm::ConnectionTrait>(
    db: &C,
    project_id: Uuid,
) -> Result<Vec<GalleryImage>, DbErr> {
    let images = crate::projects::gallery::models::Entity::find()
        .filter(crate::projects::gallery::models::Column::ProjectId.eq(project_id))
        .order_by_asc(crate::projects::gallery::models::Column::DisplayOrder)
        .all(db)
        .await?;

    Ok(images.into_iter().map(Into::into).collect())
}

/// Look up the type key for a project's optional project type
async fn load_type_key(
    db: &DatabaseConnection,
    project_type_id: Option<Uuid>,
) -> Result<Option<String>, DbErr> {
    let Some(type_id) = project_type_id else {
        return Ok(None);
    };

    Ok(crate::project_types::models::Entity::find_by_id(type_id)
        .one(db)
        .await?
        .map(|t| t.type_key))
}

/// Custom `get_one` that embeds the ordered gallery and the project type key
async fn get_one_project(db: &DatabaseConnection, id: Uuid) -> Result<Project, DbErr> {
    let model = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Project not found".to_string()))?;

    let gallery = load_gallery(db, model.id).await?;
    let type_key = load_type_key(db, model.project_type_id).await?;

    let mut project: Project = model.into();
    project.gallery = Some(gallery);
    project.project_type_key = type_key;
    Ok(project)
}

/// Custom `get_all` that returns newest projects first and embeds the
/// gallery and type key for each row
async fn get_all_projects(
    db: &DatabaseConnection,
    condition: &sea_orm::Condition,
    order_column: Column,
    order_direction: sea_orm::Order,
    offset: u64,
    limit: u64,
) -> Result<Vec<ProjectList>, DbErr> {
    let models = Entity::find()
        .filter(condition.clone())
        .order_by_desc(Column::CreatedAt)
        .order_by(order_column, order_direction)
        .offset(offset)
        .limit(limit)
        .all(db)
        .await?;

    let mut projects: Vec<ProjectList> = Vec::new();
    for model in models {
        projects.push(build_project_list(db, model).await?);
    }

    Ok(projects)
}

/// Convert a row into its list representation with gallery and type key attached
pub(crate) async fn build_project_list(
    db: &DatabaseConnection,
    model: Model,
) -> Result<ProjectList, DbErr> {
    let gallery = load_gallery(db, model.id).await?;
    let type_key = load_type_key(db, model.project_type_id).await?;

    let mut project_list = ProjectList::from(model);
    project_list.gallery = Some(gallery);
    project_list.project_type_key = type_key;
    Ok(project_list)
}

/// Create the project row and bulk-insert any gallery payload in a single
/// transaction
async fn create_project_with_gallery(
    db: &DatabaseConnection,
    create_data: ProjectCreate,
) -> Result<Project, DbErr> {
    let gallery_to_create = create_data.gallery.clone();

    let txn = db.begin().await?;

    let active_model: ActiveModel = create_data.into();
    let inserted = active_model.insert(&txn).await?;
    let project_id = inserted.id;

    if let Some(images) = gallery_to_create {
        insert_gallery_rows(&txn, project_id, images).await?;
    }

    txn.commit().await?;

    Project::get_one(db, project_id).await
}

/// Full-row update plus gallery set replacement.
///
/// A gallery payload replaces the whole set: delete every existing row for
/// the project, then insert the new rows. Both steps share one transaction
/// with the project update itself, so a failure mid-sequence can never leave
/// the gallery deleted but not re-inserted.
async fn update_project_with_gallery(
    db: &DatabaseConnection,
    id: Uuid,
    update_data: ProjectUpdate,
) -> Result<Project, DbErr> {
    let gallery_to_replace = update_data.gallery.clone();

    let existing_model = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Project not found".to_string()))?;

    let txn = db.begin().await?;

    let existing_active: ActiveModel = existing_model.into_active_model();
    let updated_active_model = update_data.merge_into_activemodel(existing_active)?;
    let _updated_project = updated_active_model.update(&txn).await?;

    if let Some(images) = gallery_to_replace {
        crate::projects::gallery::models::Entity::delete_many()
            .filter(crate::projects::gallery::models::Column::ProjectId.eq(id))
            .exec(&txn)
            .await?;

        insert_gallery_rows(&txn, id, images).await?;
    }

    txn.commit().await?;

    Project::get_one(db, id).await
}

async fn insert_gallery_rows<C: sea_orm::ConnectionTrait>(
    txn: &C,
    project_id: Uuid,
    images: Vec<GalleryImage>,
) -> Result<(), DbErr> {
    for (position, image) in images.into_iter().enumerate() {
        let order = image
            .display_order
            .unwrap_or_else(|| i32::try_from(position).unwrap_or(0));

        let row = crate::projects::gallery::models::ActiveModel {
            id: Set(Uuid::new_v4()),
            project_id: Set(Some(project_id)),
            url: Set(image.url),
            alt: Set(image.alt),
            display_order: Set(order),
            created_at: Set(chrono::Utc::now()),
            last_updated: Set(chrono::Utc::now()),
        };
        row.insert(txn).await?;
    }

    Ok(())
}
