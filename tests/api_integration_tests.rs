// API Integration Tests
//
// Purpose: exercise every endpoint against a fresh in-memory session
// Run with: cargo test --features api --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use convenant_generator::{create_router, AppState, GeneratorConfig};
    use serde_json::{json, Value};
    use tower::ServiceExt; // for oneshot

    // Helper: Create test app with default config
    fn create_test_app() -> (AppState, axum::Router) {
        let state = AppState::new(GeneratorConfig::default());
        let app = create_router(state.clone());
        (state, app)
    }

    // Helper: Parse JSON response
    async fn json_response(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&body).expect("Failed to parse JSON")
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn with_json(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn complete_answers() -> Value {
        json!({
            "manVoornamen": "Johannes",
            "manAchternaam": "de Vries",
            "manGeboortedatum": "1975-03-15",
            "manGeboorteplaats": "Amsterdam",
            "manAdres": "Dorpsstraat 4",
            "manPostcode": "2011 AB",
            "manWoonplaats": "Haarlem",
            "vrouwVoornamen": "Maria",
            "vrouwAchternaam": "Jansen",
            "vrouwGeboortedatum": "1977-11-02",
            "vrouwGeboorteplaats": "Utrecht",
            "vrouwAdres": "Kerkstraat 1",
            "vrouwPostcode": "3511 CD",
            "vrouwWoonplaats": "Utrecht",
            "huwelijksdatum": "2001-06-21",
            "huwelijksplaats": "Haarlem",
            "nationaliteit": "Nederlandse",
            "huwelijkseVoorwaarden": "nee",
            "heeftKinderen": "nee",
            "alimentatieRegeling": "afstand",
            "woningStatus": "geen",
            "heeftPrivevermogen": "nee",
            "heeftBankrekeningen": "nee",
            "heeftAutos": "nee",
            "inboedelRegeling": "verdeeld",
            "heeftSchulden": "nee",
            "pensioenRegeling": "standaard",
            "pensioenManHeeft": "nee",
            "pensioenVrouwHeeft": "nee",
            "zaakNummerBekend": "nee",
            "ondertekeningDatum": "2024-05-02",
            "ondertekeningPlaats": "Haarlem"
        })
    }

    // =========================================================================
    // Section 1: Health and registry
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let (_, app) = create_test_app();
        let response = app.oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_fields_registry() {
        let (_, app) = create_test_app();
        let response = app.oneshot(get("/api/fields")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        let fields = body["fields"].as_array().unwrap();
        assert_eq!(body["count"].as_u64(), Some(fields.len() as u64));
        assert!(fields.iter().any(|f| f["id"] == "woningStatus"));
        let sections = body["sections"].as_array().unwrap();
        let woning = sections.iter().find(|s| s["id"] == "woning").unwrap();
        assert!(woning["fields"].as_array().unwrap().iter().any(|f| f == "woningStatus"));
        let grouped: usize = sections.iter().map(|s| s["fields"].as_array().unwrap().len()).sum();
        assert_eq!(grouped, fields.len());
    }

    #[tokio::test]
    async fn test_visible_fields_follow_answers() {
        let (state, app) = create_test_app();
        let body = json_response(app.clone().oneshot(get("/api/fields/visible")).await.unwrap()).await;
        assert!(!body["fields"].as_array().unwrap().iter().any(|f| f == "huurToedeling"));

        state.session.write().await.set("woningStatus", json!("huur"));
        let body = json_response(app.oneshot(get("/api/fields/visible")).await.unwrap()).await;
        assert!(body["fields"].as_array().unwrap().iter().any(|f| f == "huurToedeling"));
    }

    // =========================================================================
    // Section 2: Answers
    // =========================================================================

    #[tokio::test]
    async fn test_patch_answer_updates_preview() {
        let (_, app) = create_test_app();
        let response = app
            .clone()
            .oneshot(with_json("PATCH", "/api/answers/alimentatieRegeling", json!("afstand")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        let blocks = body["preview"]["blocks"].as_array().unwrap();
        assert!(blocks.iter().any(|b| b["rule"] == "alimony.waiver"));

        let response = app.oneshot(get("/api/answers/alimentatieRegeling")).await.unwrap();
        let body = json_response(response).await;
        assert_eq!(body["value"], "afstand");
    }

    #[tokio::test]
    async fn test_patch_unknown_field() {
        let (_, app) = create_test_app();
        let response = app
            .oneshot(with_json("PATCH", "/api/answers/huisdieren", json!("kat")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_response(response).await;
        assert!(body["error"].as_str().unwrap().contains("huisdieren"));
    }

    #[tokio::test]
    async fn test_replace_answers() {
        let (state, app) = create_test_app();
        let response = app
            .clone()
            .oneshot(with_json("PUT", "/api/answers", complete_answers()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            state.session.read().await.get("manAchternaam"),
            Some(json!("de Vries"))
        );

        let body = json_response(app.oneshot(get("/api/answers")).await.unwrap()).await;
        assert_eq!(body["vrouwAchternaam"], "Jansen");
    }

    // =========================================================================
    // Section 3: Derived views
    // =========================================================================

    #[tokio::test]
    async fn test_validate_defaults() {
        let (_, app) = create_test_app();
        let body = json_response(app.oneshot(get("/api/validate")).await.unwrap()).await;
        assert_eq!(body["valid"], false);
        assert!(body["messages"]
            .as_array()
            .unwrap()
            .iter()
            .any(|m| m == "Voornamen man is verplicht"));
        assert!(body["suggestedSurplus"].is_null());
    }

    #[tokio::test]
    async fn test_validate_reports_suggested_surplus() {
        let (state, app) = create_test_app();
        {
            let mut session = state.session.write().await;
            session.set("woningStatus", json!("eigen-toedeling"));
            session.set("woningWaarde", json!(400000));
            session.set("hypotheekBedrag", json!(250000));
        }

        let body = json_response(app.oneshot(get("/api/validate")).await.unwrap()).await;
        assert_eq!(body["suggestedSurplus"].as_f64(), Some(150000.0));
    }

    #[tokio::test]
    async fn test_document_and_preview_agree() {
        let (_, app) = create_test_app();
        let document = json_response(app.clone().oneshot(get("/api/document")).await.unwrap()).await;
        let preview = json_response(app.oneshot(get("/api/preview")).await.unwrap()).await;

        let clauses = document["clauses"].as_array().unwrap();
        let blocks = preview["blocks"].as_array().unwrap();
        assert_eq!(clauses.len(), blocks.len());
        for (clause, block) in clauses.iter().zip(blocks) {
            assert_eq!(clause["rule"], block["rule"]);
        }
    }

    #[tokio::test]
    async fn test_preview_html() {
        let (_, app) = create_test_app();
        let response = app.oneshot(get("/preview")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("ARTIKEL 2. PARTNERALIMENTATIE"));
    }

    // =========================================================================
    // Section 4: Export
    // =========================================================================

    #[tokio::test]
    async fn test_export_requires_confirmation() {
        let (_, app) = create_test_app();
        let response = app
            .oneshot(Request::builder().method("POST").uri("/api/export").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = json_response(response).await;
        assert!(!body["issues"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_confirmed_export_downloads_markdown() {
        let (_, app) = create_test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/export?confirm=true")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let disposition = response.headers()[header::CONTENT_DISPOSITION].to_str().unwrap().to_string();
        assert!(disposition.starts_with("attachment; filename*=UTF-8''Echtscheidingsconvenant_Partij1_Partij2_"));
        assert!(disposition.ends_with(".md"));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let markdown = String::from_utf8(body.to_vec()).unwrap();
        assert!(markdown.starts_with("# CONVENANT"));
    }

    #[tokio::test]
    async fn test_complete_answers_export_without_confirmation() {
        let (_, app) = create_test_app();
        let response = app
            .clone()
            .oneshot(with_json("PUT", "/api/answers", complete_answers()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let validation = json_response(app.clone().oneshot(get("/api/validate")).await.unwrap()).await;
        assert_eq!(validation["valid"], true, "{}", validation["messages"]);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/export?format=json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response.headers()[header::CONTENT_DISPOSITION].to_str().unwrap().to_string();
        assert!(disposition.contains("Echtscheidingsconvenant_de%20Vries_Jansen_"));

        let body = json_response(response).await;
        assert!(body["blocks"].as_array().unwrap().iter().any(|b| b["rule"] == "alimony.waiver"));
    }

    #[tokio::test]
    async fn test_export_rejects_unknown_format() {
        let (_, app) = create_test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/export?format=docx&confirm=true")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
