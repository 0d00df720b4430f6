// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::RepositoryError;
use async_trait::async_trait;

/// 命中的权限规则行（已关联公司与模块）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionMatch {
    pub company_id: i32,
    pub company_name: String,
    pub module_name: Option<String>,
    pub rule_name: String,
    pub rule_description: Option<String>,
}

/// 公司权限仓库特质
#[async_trait]
pub trait CompanyPermissionRepository: Send + Sync {
    /// 在公司名、模块名、规则名和规则描述中匹配 `like_pattern`，只返回启用的规则
    ///
    /// 结果按公司名、公司ID排序，同一公司的行相邻
    async fn find_matching_permissions(
        &self,
        like_pattern: &str,
        row_limit: u64,
    ) -> Result<Vec<PermissionMatch>, RepositoryError>;
}
