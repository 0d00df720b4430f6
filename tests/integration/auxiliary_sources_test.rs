// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use super::super::helpers::{
        insert_company, insert_company_with_status, insert_module, insert_permission, insert_update,
        service, setup_db, PageSeed,
    };
    use serde_json::json;
    use wikisearch::domain::models::search_options::SearchOptions;
    use wikisearch::domain::models::search_result::ResultId;

    fn companies_only() -> SearchOptions {
        SearchOptions {
            filter_company_permissions: Some(true),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_acme_company_scenario() {
        let db = setup_db().await;
        insert_company(&db, 7, "Acme Corp").await;
        insert_module(&db, 1, "Reports").await;
        insert_permission(&db, 7, 1, "Export Data", Some("Allows CSV export"), true).await;

        let response = service(db, 50).search("Acme", &companies_only()).await.unwrap();
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(response.total_hits, 1);
        assert_eq!(value["results"][0]["id"], json!("tbdc-company-7"));
        assert_eq!(value["results"][0]["title"], json!("Acme Corp"));
        assert_eq!(value["results"][0]["path"], json!("tbdc/companies/7"));
        assert_eq!(value["results"][0]["locale"], json!("en"));
        assert_eq!(value["results"][0]["tags"], json!([]));
        assert_eq!(
            value["results"][0]["description"],
            json!("Modules: Reports · Rules: Export Data · Allows CSV export")
        );
    }

    #[tokio::test]
    async fn test_company_rules_are_grouped_and_inactive_rules_ignored() {
        let db = setup_db().await;
        insert_company(&db, 1, "Globex").await;
        insert_company(&db, 2, "Initech").await;
        insert_module(&db, 1, "Ledger").await;
        insert_module(&db, 2, "Payroll").await;
        insert_permission(&db, 1, 1, "Ledger export", None, true).await;
        insert_permission(&db, 1, 2, "Ledger import", None, true).await;
        insert_permission(&db, 2, 1, "Ledger audit", None, false).await;

        let response = service(db, 50).search("ledger", &companies_only()).await.unwrap();

        assert_eq!(
            response.results.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![ResultId::Company(1)]
        );
        assert_eq!(
            response.results[0].description,
            "Modules: Ledger, Payroll · Rules: Ledger export, Ledger import"
        );
    }

    #[tokio::test]
    async fn test_inactive_companies_are_not_returned() {
        let db = setup_db().await;
        insert_company(&db, 1, "Acme Corp").await;
        insert_company_with_status(&db, 2, "Acme Legacy", false).await;
        insert_module(&db, 1, "Reports").await;
        insert_permission(&db, 1, 1, "Export Data", None, true).await;
        insert_permission(&db, 2, 1, "Export Data", None, true).await;

        let response = service(db, 50).search("acme", &companies_only()).await.unwrap();

        assert_eq!(
            response.results.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![ResultId::Company(1)]
        );
    }

    #[tokio::test]
    async fn test_legacy_permission_flag_enables_companies() {
        let db = setup_db().await;
        insert_company(&db, 3, "Acme Corp").await;
        insert_module(&db, 1, "Reports").await;
        insert_permission(&db, 3, 1, "Export Data", None, true).await;

        let svc = service(db, 50);

        let legacy = SearchOptions {
            filter_permissions: Some(true),
            ..Default::default()
        };
        assert_eq!(svc.search("acme", &legacy).await.unwrap().total_hits, 1);
        assert_eq!(
            svc.search("acme", &SearchOptions::default()).await.unwrap().total_hits,
            0
        );
    }

    #[tokio::test]
    async fn test_updates_source() {
        let db = setup_db().await;
        insert_update(&db, 1, "Release 4.2", "Faster exports", Some("Export speedups"), Some(2)).await;
        insert_update(&db, 2, "Release 4.3", "Export scheduling is here", None, Some(9)).await;
        insert_update(&db, 3, "Export draft", "not yet", None, None).await;

        let opts = SearchOptions {
            filter_updates: Some(true),
            ..Default::default()
        };
        let response = service(db, 50).search("export", &opts).await.unwrap();
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(response.total_hits, 2);
        assert_eq!(value["results"][0]["id"], json!("update-2"));
        assert_eq!(value["results"][0]["description"], json!("Export scheduling is here"));
        assert_eq!(value["results"][0]["path"], json!("tbdc/updates/2"));
        assert_eq!(value["results"][1]["id"], json!("update-1"));
        assert_eq!(value["results"][1]["description"], json!("Export speedups"));
        assert_eq!(value["results"][1]["tags"], json!([]));
    }

    #[tokio::test]
    async fn test_pages_first_then_companies_then_updates_capped() {
        let db = setup_db().await;
        PageSeed::new(1, "Acme onboarding").insert(&db).await;
        PageSeed::new(2, "Acme contract").insert(&db).await;
        insert_company(&db, 9, "Acme Corp").await;
        insert_module(&db, 1, "Reports").await;
        insert_permission(&db, 9, 1, "Export Data", None, true).await;
        insert_update(&db, 1, "Acme rollout", "Now live", None, Some(5)).await;

        let opts = SearchOptions {
            filter_company_permissions: Some(true),
            filter_updates: Some(true),
            ..Default::default()
        };

        let svc = service(db, 3);
        let response = svc.search("acme", &opts).await.unwrap();

        assert_eq!(
            response.results.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![ResultId::Page(2), ResultId::Page(1), ResultId::Company(9)]
        );
        assert_eq!(response.total_hits, 3);

        let no_pages = SearchOptions {
            filter_pages: Some(false),
            ..opts
        };
        let response = svc.search("acme", &no_pages).await.unwrap();
        assert_eq!(
            response.results.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![ResultId::Company(9), ResultId::Update(1)]
        );
    }
}
