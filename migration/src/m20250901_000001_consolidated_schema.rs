use sea_orm_migration::prelude::extension::postgres::Type;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    #[allow(clippy::too_many_lines)] // Large migration requires extensive table definitions
    #[allow(clippy::match_wildcard_for_single_variants)] // Wildcard matches for unsupported databases are semantically correct
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Enable UUID extension for PostgreSQL
        if manager.get_database_backend() == sea_orm::DatabaseBackend::Postgres {
            manager
                .get_connection()
                .execute_unprepared("CREATE EXTENSION IF NOT EXISTS \"uuid-ossp\";")
                .await?;
        }

        // Create service_line enum for PostgreSQL (will be ignored by SQLite)
        if manager.get_database_backend() == sea_orm::DatabaseBackend::Postgres {
            manager
                .create_type(
                    Type::create()
                        .as_enum(ServiceLine::Table)
                        .values([
                            ServiceLine::Csr,
                            ServiceLine::TeamBuilding,
                            ServiceLine::CorporateEvent,
                            ServiceLine::TrainingProgram,
                        ])
                        .to_owned(),
                )
                .await?;
        }

        // Create project_types table
        let mut project_types_table = Table::create()
            .table(ProjectTypes::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(ProjectTypes::TypeKey)
                    .text()
                    .not_null()
                    .unique_key(),
            )
            .col(ColumnDef::new(ProjectTypes::Description).text())
            .col(
                ColumnDef::new(ProjectTypes::DisplayOrder)
                    .integer()
                    .not_null()
                    .default(0),
            )
            .col(
                ColumnDef::new(ProjectTypes::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .col(
                ColumnDef::new(ProjectTypes::LastUpdated)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .to_owned();

        add_uuid_primary_key(manager, &mut project_types_table, ProjectTypes::Id)?;
        manager.create_table(project_types_table).await?;

        // Create projects table
        let mut projects_table = Table::create()
            .table(Projects::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(Projects::Title)
                    .text()
                    .not_null()
                    .unique_key(),
            )
            .col(ColumnDef::new(Projects::Category).text())
            .col(ColumnDef::new(Projects::Summary).text())
            .col(ColumnDef::new(Projects::Description).text())
            .col(ColumnDef::new(Projects::Year).integer())
            .col(ColumnDef::new(Projects::Client).text())
            .col(
                ColumnDef::new(Projects::DisplayOrder)
                    .integer()
                    .not_null()
                    .default(0),
            )
            .col(
                ColumnDef::new(Projects::IsActive)
                    .boolean()
                    .not_null()
                    .default(true),
            )
            .col(
                ColumnDef::new(Projects::IsFeatured)
                    .boolean()
                    .not_null()
                    .default(false),
            )
            .col(ColumnDef::new(Projects::ProjectTypeId).uuid())
            .col(
                ColumnDef::new(Projects::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .col(
                ColumnDef::new(Projects::LastUpdated)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_projects_project_type_id")
                    .from(Projects::Table, Projects::ProjectTypeId)
                    .to(ProjectTypes::Table, ProjectTypes::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .on_update(ForeignKeyAction::NoAction),
            )
            .to_owned();

        add_uuid_primary_key(manager, &mut projects_table, Projects::Id)?;
        manager.create_table(projects_table).await?;

        // Create project_gallery table. Rows are replaced as a full set when a
        // project update carries a gallery payload, so the cascade keeps
        // orphans impossible.
        let mut project_gallery_table = Table::create()
            .table(ProjectGallery::Table)
            .if_not_exists()
            .col(ColumnDef::new(ProjectGallery::ProjectId).uuid().not_null())
            .col(ColumnDef::new(ProjectGallery::Url).text().not_null())
            .col(ColumnDef::new(ProjectGallery::Alt).text())
            .col(
                ColumnDef::new(ProjectGallery::DisplayOrder)
                    .integer()
                    .not_null()
                    .default(0),
            )
            .col(
                ColumnDef::new(ProjectGallery::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .col(
                ColumnDef::new(ProjectGallery::LastUpdated)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_project_gallery_project_id")
                    .from(ProjectGallery::Table, ProjectGallery::ProjectId)
                    .to(Projects::Table, Projects::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::NoAction),
            )
            .to_owned();

        add_uuid_primary_key(manager, &mut project_gallery_table, ProjectGallery::Id)?;
        manager.create_table(project_gallery_table).await?;

        // Create hero_images table
        let mut hero_images_table = Table::create()
            .table(HeroImages::Table)
            .if_not_exists()
            .col(ColumnDef::new(HeroImages::Url).text().not_null())
            .col(ColumnDef::new(HeroImages::Alt).text())
            .col(
                ColumnDef::new(HeroImages::IsActive)
                    .boolean()
                    .not_null()
                    .default(true),
            )
            .col(
                ColumnDef::new(HeroImages::DisplayOrder)
                    .integer()
                    .not_null()
                    .default(0),
            )
            .col(
                ColumnDef::new(HeroImages::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .col(
                ColumnDef::new(HeroImages::LastUpdated)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .to_owned();

        add_uuid_primary_key(manager, &mut hero_images_table, HeroImages::Id)?;
        manager.create_table(hero_images_table).await?;

        // Create client_logos table
        let mut client_logos_table = Table::create()
            .table(ClientLogos::Table)
            .if_not_exists()
            .col(ColumnDef::new(ClientLogos::Name).text().not_null())
            .col(ColumnDef::new(ClientLogos::Url).text().not_null())
            .col(
                ColumnDef::new(ClientLogos::IsActive)
                    .boolean()
                    .not_null()
                    .default(true),
            )
            .col(
                ColumnDef::new(ClientLogos::DisplayOrder)
                    .integer()
                    .not_null()
                    .default(0),
            )
            .col(
                ColumnDef::new(ClientLogos::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .col(
                ColumnDef::new(ClientLogos::LastUpdated)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .to_owned();

        add_uuid_primary_key(manager, &mut client_logos_table, ClientLogos::Id)?;
        manager.create_table(client_logos_table).await?;

        // Create inquiries table. One table covers the four service lines; the
        // training_* columns only carry data for training_program rows.
        let mut inquiries_table = Table::create()
            .table(Inquiries::Table)
            .if_not_exists()
            .col(ColumnDef::new(Inquiries::ContactName).text().not_null())
            .col(ColumnDef::new(Inquiries::Company).text())
            .col(ColumnDef::new(Inquiries::Email).text().not_null())
            .col(ColumnDef::new(Inquiries::Phone).text())
            .col(ColumnDef::new(Inquiries::EventDate).date())
            .col(ColumnDef::new(Inquiries::ParticipantCount).integer())
            .col(ColumnDef::new(Inquiries::Location).text())
            .col(ColumnDef::new(Inquiries::Message).text())
            .col(ColumnDef::new(Inquiries::TrainingTopic).text())
            .col(ColumnDef::new(Inquiries::TrainingAudience).text())
            .col(
                ColumnDef::new(Inquiries::Status)
                    .text()
                    .not_null()
                    .default("new"),
            )
            .col(
                ColumnDef::new(Inquiries::CreatedAt)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .col(
                ColumnDef::new(Inquiries::LastUpdated)
                    .timestamp_with_time_zone()
                    .not_null()
                    .default(Expr::current_timestamp()),
            )
            .to_owned();

        add_uuid_primary_key(manager, &mut inquiries_table, Inquiries::Id)?;

        // Add service column with appropriate constraint based on database backend
        match manager.get_database_backend() {
            sea_orm::DatabaseBackend::Postgres => {
                inquiries_table.col(
                    ColumnDef::new(Inquiries::Service)
                        .custom(ServiceLine::Table)
                        .not_null(),
                );
            }
            sea_orm::DatabaseBackend::Sqlite => {
                inquiries_table.col(ColumnDef::new(Inquiries::Service).text().not_null());
            }
            _ => {
                return Err(DbErr::Custom("Unsupported database backend".to_string()));
            }
        }

        manager.create_table(inquiries_table).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse dependency order
        manager
            .drop_table(Table::drop().table(Inquiries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClientLogos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HeroImages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProjectGallery::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProjectTypes::Table).to_owned())
            .await?;

        if manager.get_database_backend() == sea_orm::DatabaseBackend::Postgres {
            manager
                .drop_type(Type::drop().name(ServiceLine::Table).to_owned())
                .await?;
        }

        Ok(())
    }
}

/// Add the ID column with appropriate type and default based on database backend
#[allow(clippy::match_wildcard_for_single_variants)]
fn add_uuid_primary_key<T: IntoIden + 'static>(
    manager: &SchemaManager<'_>,
    table: &mut TableCreateStatement,
    id_column: T,
) -> Result<(), DbErr> {
    match manager.get_database_backend() {
        sea_orm::DatabaseBackend::Postgres => {
            table.col(
                ColumnDef::new(id_column)
                    .uuid()
                    .not_null()
                    .primary_key()
                    .default(Expr::cust("uuid_generate_v4()")),
            );
        }
        sea_orm::DatabaseBackend::Sqlite => {
            table.col(ColumnDef::new(id_column).uuid().not_null().primary_key());
        }
        _ => {
            return Err(DbErr::Custom("Unsupported database backend".to_string()));
        }
    }
    Ok(())
}

#[derive(DeriveIden)]
enum ProjectTypes {
    Table,
    Id,
    TypeKey,
    Description,
    DisplayOrder,
    CreatedAt,
    LastUpdated,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Title,
    Category,
    Summary,
    Description,
    Year,
    Client,
    DisplayOrder,
    IsActive,
    IsFeatured,
    ProjectTypeId,
    CreatedAt,
    LastUpdated,
}

#[derive(DeriveIden)]
enum ProjectGallery {
    Table,
    Id,
    ProjectId,
    Url,
    Alt,
    DisplayOrder,
    CreatedAt,
    LastUpdated,
}

#[derive(DeriveIden)]
enum HeroImages {
    Table,
    Id,
    Url,
    Alt,
    IsActive,
    DisplayOrder,
    CreatedAt,
    LastUpdated,
}

#[derive(DeriveIden)]
enum ClientLogos {
    Table,
    Id,
    Name,
    Url,
    IsActive,
    DisplayOrder,
    CreatedAt,
    LastUpdated,
}

#[derive(DeriveIden)]
enum Inquiries {
    Table,
    Id,
    Service,
    ContactName,
    Company,
    Email,
    Phone,
    EventDate,
    ParticipantCount,
    Location,
    Message,
    TrainingTopic,
    TrainingAudience,
    Status,
    CreatedAt,
    LastUpdated,
}

#[derive(DeriveIden)]
enum ServiceLine {
    Table,
    Csr,
    TeamBuilding,
    CorporateEvent,
    TrainingProgram,
}
