// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;

/// Per-query options.
///
/// Pages are searched unless `filter_pages` is explicitly `false`. Companies
/// and updates are only searched when explicitly requested; the legacy
/// `filter_permissions` flag is honoured when `filter_company_permissions`
/// is absent.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    pub locale: Option<String>,
    pub path: Option<String>,
    pub filter_pages: Option<bool>,
    pub filter_company_permissions: Option<bool>,
    pub filter_permissions: Option<bool>,
    pub filter_updates: Option<bool>,
}

impl SearchOptions {
    pub fn include_pages(&self) -> bool {
        self.filter_pages.unwrap_or(true)
    }

    pub fn include_companies(&self) -> bool {
        self.filter_company_permissions
            .or(self.filter_permissions)
            .unwrap_or(false)
    }

    pub fn include_updates(&self) -> bool {
        self.filter_updates.unwrap_or(false)
    }

    /// Locale filter; blank values mean "no filter".
    pub fn locale_filter(&self) -> Option<&str> {
        non_blank(self.locale.as_deref())
    }

    /// Path prefix filter; blank values mean "no filter".
    pub fn path_filter(&self) -> Option<&str> {
        non_blank(self.path.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
