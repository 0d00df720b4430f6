// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 提供领域仓库接口的 SeaORM 实现
pub mod company_permission_repo_impl;
pub mod page_search_repo_impl;
pub mod page_tag_repo_impl;
pub mod update_repo_impl;

use crate::domain::services::search_service::{SearchService, SearchServiceConfig};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use company_permission_repo_impl::CompanyPermissionRepositoryImpl;
use page_search_repo_impl::PageSearchRepositoryImpl;
use page_tag_repo_impl::PageTagRepositoryImpl;
use update_repo_impl::UpdateRepositoryImpl;

/// 由数据库仓库组装的搜索服务
pub type DbSearchService = SearchService<
    PageSearchRepositoryImpl,
    PageTagRepositoryImpl,
    CompanyPermissionRepositoryImpl,
    UpdateRepositoryImpl,
>;

/// 以同一个连接池组装搜索服务
pub fn build_search_service(db: Arc<DatabaseConnection>, config: SearchServiceConfig) -> DbSearchService {
    SearchService::new(
        Arc::new(PageSearchRepositoryImpl::new(db.clone())),
        Arc::new(PageTagRepositoryImpl::new(db.clone())),
        Arc::new(CompanyPermissionRepositoryImpl::new(db.clone())),
        Arc::new(UpdateRepositoryImpl::new(db)),
        config,
    )
}
