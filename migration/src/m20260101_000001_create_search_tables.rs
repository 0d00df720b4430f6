// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 搜索所需的数据表
///
/// 页面、标签与 TBDC 表由 Wiki 主程序维护，这里只在表不存在时创建，
/// 便于独立部署和测试环境使用。
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. Pages and tags
        manager
            .create_table(
                Table::create()
                    .table(Pages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Pages::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Pages::Path).string().not_null())
                    .col(ColumnDef::new(Pages::Title).string().not_null())
                    .col(ColumnDef::new(Pages::Description).string().null())
                    .col(ColumnDef::new(Pages::Content).text().null())
                    .col(ColumnDef::new(Pages::Render).text().null())
                    .col(
                        ColumnDef::new(Pages::LocaleCode)
                            .string_len(5)
                            .not_null()
                            .default("en"),
                    )
                    .col(
                        ColumnDef::new(Pages::IsPublished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tags::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tags::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tags::Tag).string().not_null().unique_key())
                    .col(ColumnDef::new(Tags::Title).string().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PageTags::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PageTags::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PageTags::PageId).integer().not_null())
                    .col(ColumnDef::new(PageTags::TagId).integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 2. TBDC companies, modules and permission rules
        manager
            .create_table(
                Table::create()
                    .table(TbdcCompanies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TbdcCompanies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TbdcCompanies::Name).string().not_null())
                    .col(
                        ColumnDef::new(TbdcCompanies::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TbdcModules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TbdcModules::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TbdcModules::Name).string().not_null())
                    .col(ColumnDef::new(TbdcModules::ProductId).integer().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TbdcPermissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TbdcPermissions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TbdcPermissions::CompanyId).integer().not_null())
                    .col(ColumnDef::new(TbdcPermissions::ModuleId).integer().not_null())
                    .col(ColumnDef::new(TbdcPermissions::RuleName).string().not_null())
                    .col(ColumnDef::new(TbdcPermissions::Level).string().not_null())
                    .col(ColumnDef::new(TbdcPermissions::Description).text().null())
                    .col(
                        ColumnDef::new(TbdcPermissions::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        // 3. Product updates
        manager
            .create_table(
                Table::create()
                    .table(TbdcUpdates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TbdcUpdates::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TbdcUpdates::Title).string().not_null())
                    .col(ColumnDef::new(TbdcUpdates::Content).text().not_null())
                    .col(ColumnDef::new(TbdcUpdates::Summary).text().null())
                    .col(ColumnDef::new(TbdcUpdates::CategoryId).integer().null())
                    .col(
                        ColumnDef::new(TbdcUpdates::IsPublished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(TbdcUpdates::PublishedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TbdcUpdates::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TbdcPermissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TbdcModules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TbdcCompanies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PageTags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Pages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Pages {
    Table,
    Id,
    Path,
    Title,
    Description,
    Content,
    Render,
    #[sea_orm(iden = "localeCode")]
    LocaleCode,
    #[sea_orm(iden = "isPublished")]
    IsPublished,
}

#[derive(DeriveIden)]
enum Tags {
    Table,
    Id,
    Tag,
    Title,
}

#[derive(DeriveIden)]
pub(crate) enum PageTags {
    #[sea_orm(iden = "pageTags")]
    Table,
    Id,
    #[sea_orm(iden = "pageId")]
    PageId,
    #[sea_orm(iden = "tagId")]
    TagId,
}

#[derive(DeriveIden)]
enum TbdcCompanies {
    Table,
    Id,
    Name,
    #[sea_orm(iden = "isActive")]
    IsActive,
}

#[derive(DeriveIden)]
enum TbdcModules {
    Table,
    Id,
    Name,
    #[sea_orm(iden = "productId")]
    ProductId,
}

#[derive(DeriveIden)]
enum TbdcPermissions {
    Table,
    Id,
    #[sea_orm(iden = "companyId")]
    CompanyId,
    #[sea_orm(iden = "moduleId")]
    ModuleId,
    #[sea_orm(iden = "ruleName")]
    RuleName,
    Level,
    Description,
    #[sea_orm(iden = "isActive")]
    IsActive,
}

#[derive(DeriveIden)]
enum TbdcUpdates {
    Table,
    Id,
    Title,
    Content,
    Summary,
    #[sea_orm(iden = "categoryId")]
    CategoryId,
    #[sea_orm(iden = "isPublished")]
    IsPublished,
    #[sea_orm(iden = "publishedAt")]
    PublishedAt,
}
