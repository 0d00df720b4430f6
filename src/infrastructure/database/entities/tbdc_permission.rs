// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

/// 公司在某模块下的权限规则
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tbdc_permissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "companyId")]
    pub company_id: i32,
    #[sea_orm(column_name = "moduleId")]
    pub module_id: i32,
    #[sea_orm(column_name = "ruleName")]
    pub rule_name: String,
    pub level: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_name = "isActive")]
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tbdc_company::Entity",
        from = "Column::CompanyId",
        to = "super::tbdc_company::Column::Id"
    )]
    Company,
    #[sea_orm(
        belongs_to = "super::tbdc_module::Entity",
        from = "Column::ModuleId",
        to = "super::tbdc_module::Column::Id"
    )]
    Module,
}

impl Related<super::tbdc_company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl Related<super::tbdc_module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Module.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
