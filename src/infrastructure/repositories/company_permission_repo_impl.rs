// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::repositories::company_permission_repository::{
    CompanyPermissionRepository, PermissionMatch,
};
use crate::domain::search::sql::SqlWriter;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, FromQueryResult, Statement};
use std::sync::Arc;

#[derive(Debug, FromQueryResult)]
struct PermissionRow {
    company_id: i32,
    company_name: String,
    module_name: Option<String>,
    rule_name: String,
    rule_description: Option<String>,
}

impl From<PermissionRow> for PermissionMatch {
    fn from(row: PermissionRow) -> Self {
        Self {
            company_id: row.company_id,
            company_name: row.company_name,
            module_name: row.module_name,
            rule_name: row.rule_name,
            rule_description: row.rule_description,
        }
    }
}

/// 构建公司权限匹配语句
///
/// 只读取启用公司的启用权限规则；公司名、模块名、规则名、规则描述任一包含关键词即命中。
/// 按公司名和公司ID排序，保证同一公司的行相邻。
pub fn build_permission_statement(backend: DbBackend, like_pattern: &str, row_limit: u64) -> Statement {
    let mut w = SqlWriter::new(backend);

    w.push("SELECT ")
        .qualified("c", "id")
        .push(" AS company_id, ")
        .qualified("c", "name")
        .push(" AS company_name, ")
        .qualified("m", "name")
        .push(" AS module_name, ")
        .qualified("p", "ruleName")
        .push(" AS rule_name, ")
        .qualified("p", "description")
        .push(" AS rule_description FROM ")
        .ident("tbdc_permissions")
        .push(" AS ")
        .ident("p")
        .push(" JOIN ")
        .ident("tbdc_companies")
        .push(" AS ")
        .ident("c")
        .push(" ON ")
        .qualified("c", "id")
        .push(" = ")
        .qualified("p", "companyId")
        .push(" LEFT JOIN ")
        .ident("tbdc_modules")
        .push(" AS ")
        .ident("m")
        .push(" ON ")
        .qualified("m", "id")
        .push(" = ")
        .qualified("p", "moduleId")
        .push(" WHERE ")
        .qualified("p", "isActive")
        .push(" = ")
        .param(true)
        .push(" AND ")
        .qualified("c", "isActive")
        .push(" = ")
        .param(true)
        .push(" AND (");

    let matched = [("c", "name"), ("m", "name"), ("p", "ruleName"), ("p", "description")];
    for (i, (alias, column)) in matched.iter().enumerate() {
        if i > 0 {
            w.push(" OR ");
        }
        w.lower_qualified(alias, column).like_param(like_pattern);
    }

    w.push(") ORDER BY ")
        .qualified("c", "name")
        .push(" ASC, ")
        .qualified("c", "id")
        .push(" ASC, ")
        .qualified("p", "id")
        .push(" ASC LIMIT ")
        .param(row_limit as i64);

    w.into_statement()
}

/// 公司权限仓库实现
#[derive(Clone)]
pub struct CompanyPermissionRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl CompanyPermissionRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CompanyPermissionRepository for CompanyPermissionRepositoryImpl {
    async fn find_matching_permissions(
        &self,
        like_pattern: &str,
        row_limit: u64,
    ) -> Result<Vec<PermissionMatch>, RepositoryError> {
        let stmt = build_permission_statement(self.db.get_database_backend(), like_pattern, row_limit);
        let rows = PermissionRow::find_by_statement(stmt)
            .all(self.db.as_ref())
            .await?;
        Ok(rows.into_iter().map(PermissionMatch::from).collect())
    }
}
