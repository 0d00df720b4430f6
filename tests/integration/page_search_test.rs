// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use super::super::helpers::{insert_tag, service, setup_db, tag_page, PageSeed};
    use serde_json::json;
    use wikisearch::domain::models::search_options::SearchOptions;
    use wikisearch::domain::models::search_result::{ResultId, SearchResponse};

    fn ids(response: &SearchResponse) -> Vec<ResultId> {
        response.results.iter().map(|r| r.id).collect()
    }

    #[tokio::test]
    async fn test_deploy_pipeline_scenario() {
        let db = setup_db().await;
        PageSeed::new(1, "Deploy Pipeline").insert(&db).await;
        PageSeed::new(2, "Deploy Notes")
            .description("pipeline details")
            .insert(&db)
            .await;
        PageSeed::new(3, "Unrelated")
            .content("deploy pipeline")
            .unpublished()
            .insert(&db)
            .await;

        let response = service(db, 50)
            .search("deploy pipeline", &SearchOptions::default())
            .await
            .unwrap();

        assert_eq!(ids(&response), vec![ResultId::Page(1), ResultId::Page(2)]);
        assert_eq!(response.total_hits, 2);
        assert!(response.suggestions.is_empty());
    }

    #[tokio::test]
    async fn test_exact_title_outranks_partial_title() {
        let db = setup_db().await;
        PageSeed::new(1, "Advanced Setup Guide Extras").insert(&db).await;
        PageSeed::new(2, "Setup Guide").insert(&db).await;

        let response = service(db, 50)
            .search("Setup Guide", &SearchOptions::default())
            .await
            .unwrap();

        assert_eq!(ids(&response), vec![ResultId::Page(2), ResultId::Page(1)]);
    }

    #[tokio::test]
    async fn test_like_metacharacters_match_literally() {
        let db = setup_db().await;
        PageSeed::new(1, "100% Done").insert(&db).await;
        PageSeed::new(2, "1000 Reasons").insert(&db).await;
        PageSeed::new(3, "snake_case rules").insert(&db).await;
        PageSeed::new(4, "snakeXcase rules").insert(&db).await;

        let svc = service(db, 50);

        let percent = svc.search("100%", &SearchOptions::default()).await.unwrap();
        assert_eq!(ids(&percent), vec![ResultId::Page(1)]);

        let full = svc.search("100% Done", &SearchOptions::default()).await.unwrap();
        assert_eq!(ids(&full), vec![ResultId::Page(1)]);

        let underscore = svc.search("snake_case", &SearchOptions::default()).await.unwrap();
        assert_eq!(ids(&underscore), vec![ResultId::Page(3)]);
    }

    #[tokio::test]
    async fn test_terms_past_the_eighth_are_ignored() {
        let db = setup_db().await;
        PageSeed::new(1, "aa bb cc dd ee ff gg hh").insert(&db).await;
        PageSeed::new(2, "zz only").insert(&db).await;

        let response = service(db, 50)
            .search("aa bb cc dd ee ff gg hh zz", &SearchOptions::default())
            .await
            .unwrap();

        assert_eq!(ids(&response), vec![ResultId::Page(1)]);
    }

    #[tokio::test]
    async fn test_ties_are_broken_by_title() {
        let db = setup_db().await;
        PageSeed::new(1, "Zeta").content("kubernetes notes").insert(&db).await;
        PageSeed::new(2, "Alpha").content("kubernetes notes").insert(&db).await;
        PageSeed::new(3, "Mid").content("kubernetes notes").insert(&db).await;

        let svc = service(db, 50);
        let first = svc.search("kubernetes", &SearchOptions::default()).await.unwrap();
        let second = svc.search("kubernetes", &SearchOptions::default()).await.unwrap();

        assert_eq!(
            ids(&first),
            vec![ResultId::Page(2), ResultId::Page(3), ResultId::Page(1)]
        );
        assert_eq!(ids(&first), ids(&second));
    }

    #[tokio::test]
    async fn test_locale_and_path_filters() {
        let db = setup_db().await;
        PageSeed::new(1, "Billing FAQ").path("help/billing").insert(&db).await;
        PageSeed::new(2, "Billing FAQ").path("help/billing").locale("fr").insert(&db).await;
        PageSeed::new(3, "Billing internals").path("dev/billing").insert(&db).await;
        PageSeed::new(4, "Billing odd").path("100%/billing").insert(&db).await;
        PageSeed::new(5, "Billing other").path("1000/billing").insert(&db).await;

        let svc = service(db, 50);

        let french = SearchOptions {
            locale: Some("fr".to_string()),
            ..Default::default()
        };
        let response = svc.search("billing", &french).await.unwrap();
        assert_eq!(ids(&response), vec![ResultId::Page(2)]);
        assert_eq!(response.results[0].locale, "fr");

        let help = SearchOptions {
            locale: Some("en".to_string()),
            path: Some("help".to_string()),
            ..Default::default()
        };
        let response = svc.search("billing", &help).await.unwrap();
        assert_eq!(ids(&response), vec![ResultId::Page(1)]);

        let literal = SearchOptions {
            path: Some("100%".to_string()),
            ..Default::default()
        };
        let response = svc.search("billing", &literal).await.unwrap();
        assert_eq!(ids(&response), vec![ResultId::Page(4)]);

        let blank = SearchOptions {
            locale: Some("  ".to_string()),
            path: Some(String::new()),
            ..Default::default()
        };
        let response = svc.search("billing", &blank).await.unwrap();
        assert_eq!(response.total_hits, 5);
    }

    #[tokio::test]
    async fn test_result_cap() {
        let db = setup_db().await;
        for id in 1..=8 {
            PageSeed::new(id, "Runbook").content("oncall runbook").insert(&db).await;
        }

        let response = service(db, 5)
            .search("runbook", &SearchOptions::default())
            .await
            .unwrap();

        assert_eq!(response.results.len(), 5);
        assert_eq!(response.total_hits, 5);
    }

    #[tokio::test]
    async fn test_tags_attached_to_pages() {
        let db = setup_db().await;
        PageSeed::new(1, "Deploy Pipeline").insert(&db).await;
        PageSeed::new(2, "Deploy Notes").insert(&db).await;
        insert_tag(&db, 1, "devops").await;
        insert_tag(&db, 2, "ci").await;
        tag_page(&db, 1, 1).await;
        tag_page(&db, 1, 2).await;

        let response = service(db, 50)
            .search("deploy", &SearchOptions::default())
            .await
            .unwrap();

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["results"][0]["id"], json!(2));
        assert_eq!(value["results"][0]["tags"], json!([]));
        assert_eq!(value["results"][1]["id"], json!(1));
        assert_eq!(
            value["results"][1]["tags"],
            json!([{ "tag": "ci" }, { "tag": "devops" }])
        );
    }

    #[tokio::test]
    async fn test_short_query_returns_empty_response() {
        let db = setup_db().await;
        PageSeed::new(1, "A").insert(&db).await;

        let response = service(db, 50).search(" a ", &SearchOptions::default()).await.unwrap();

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "results": [], "suggestions": [], "totalHits": 0 })
        );
    }
}
