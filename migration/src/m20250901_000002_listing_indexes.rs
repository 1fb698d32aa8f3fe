use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ============ PROJECTS TABLE INDEXES ============
        manager
            .create_index(
                Index::create()
                    .name("idx_projects_created_at")
                    .table(Projects::Table)
                    .col(Projects::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_projects_display_order")
                    .table(Projects::Table)
                    .col(Projects::DisplayOrder)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_projects_is_active")
                    .table(Projects::Table)
                    .col(Projects::IsActive)
                    .to_owned(),
            )
            .await?;

        // ============ PROJECT_GALLERY TABLE INDEXES ============
        // The gallery set is deleted and re-inserted by project id on every
        // gallery-carrying update, so the FK column gets its own index.
        manager
            .create_index(
                Index::create()
                    .name("idx_project_gallery_project_id")
                    .table(ProjectGallery::Table)
                    .col(ProjectGallery::ProjectId)
                    .to_owned(),
            )
            .await?;

        // ============ PROJECT_TYPES TABLE INDEXES ============
        manager
            .create_index(
                Index::create()
                    .name("idx_project_types_display_order")
                    .table(ProjectTypes::Table)
                    .col(ProjectTypes::DisplayOrder)
                    .to_owned(),
            )
            .await?;

        // ============ HERO_IMAGES / CLIENT_LOGOS TABLE INDEXES ============
        manager
            .create_index(
                Index::create()
                    .name("idx_hero_images_display_order")
                    .table(HeroImages::Table)
                    .col(HeroImages::DisplayOrder)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_client_logos_display_order")
                    .table(ClientLogos::Table)
                    .col(ClientLogos::DisplayOrder)
                    .to_owned(),
            )
            .await?;

        // ============ INQUIRIES TABLE INDEXES ============
        manager
            .create_index(
                Index::create()
                    .name("idx_inquiries_service")
                    .table(Inquiries::Table)
                    .col(Inquiries::Service)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_inquiries_status")
                    .table(Inquiries::Table)
                    .col(Inquiries::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_inquiries_created_at")
                    .table(Inquiries::Table)
                    .col(Inquiries::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let index_names = [
            "idx_projects_created_at",
            "idx_projects_display_order",
            "idx_projects_is_active",
            "idx_project_gallery_project_id",
            "idx_project_types_display_order",
            "idx_hero_images_display_order",
            "idx_client_logos_display_order",
            "idx_inquiries_service",
            "idx_inquiries_status",
            "idx_inquiries_created_at",
        ];

        for name in index_names {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    CreatedAt,
    DisplayOrder,
    IsActive,
}

#[derive(DeriveIden)]
enum ProjectGallery {
    Table,
    ProjectId,
}

#[derive(DeriveIden)]
enum ProjectTypes {
    Table,
    DisplayOrder,
}

#[derive(DeriveIden)]
enum HeroImages {
    Table,
    DisplayOrder,
}

#[derive(DeriveIden)]
enum ClientLogos {
    Table,
    DisplayOrder,
}

#[derive(DeriveIden)]
enum Inquiries {
    Table,
    Service,
    Status,
    CreatedAt,
}
