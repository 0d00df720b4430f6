// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub path: String,
    pub title: String,
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub render: Option<String>,
    #[sea_orm(column_name = "localeCode")]
    pub locale_code: String,
    #[sea_orm(column_name = "isPublished")]
    pub is_published: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::page_tag::Entity")]
    PageTag,
}

impl Related<super::page_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PageTag.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
