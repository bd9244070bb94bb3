// tests/e2e_http.rs
use axum::body::Body;
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use tower::util::ServiceExt as _;

mod support;

#[tokio::test]
async fn ping_returns_fixed_text() {
    let dir = tempfile::tempdir().unwrap();
    let app = support::make_test_router(dir.path());

    let req = Request::builder()
        .method("GET")
        .uri("/ping")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        support::body_string(resp).await,
        "I am coming from info query builder"
    );
}

/// Summer Sale without cities or promo code fans out to 11 cities x 2 envs.
#[tokio::test]
async fn generate_writes_one_insert_per_city_and_env() {
    let dir = tempfile::tempdir().unwrap();
    let app = support::make_test_router(dir.path());

    let req = support::json_post(
        "/query/generate",
        r#"{"title":"Summer Sale","start_time":"2024-06-01","end_date":"2024-06-02"}"#,
    );
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert!(support::body_string(resp).await.is_empty());

    let stg = support::read_script(dir.path(), "stg", "SummerSale.sql").expect("stg script");
    let prod = support::read_script(dir.path(), "prod", "SummerSale.sql").expect("prod script");

    assert_eq!(support::count_statements(&stg, "INSERT INTO infos"), 11);
    assert_eq!(support::count_statements(&prod, "INSERT INTO infos"), 11);

    assert!(stg.contains("'https://stg.example.com/images/SummerSale.png'"));
    assert!(prod.contains("'https://cdn.example.com/images/SummerSale.png'"));
    assert!(stg.contains("'2024-06-01 00:00:00', '2024-06-02 23:59:59', 'Bali'"));
    assert!(stg.contains("'Surabaya'"));
    assert!(stg.ends_with("true);\n\n"));
}

#[tokio::test]
async fn generate_names_script_after_promo_code() {
    let dir = tempfile::tempdir().unwrap();
    let app = support::make_test_router(dir.path());

    let req = support::json_post(
        "/query/generate?env=prod",
        r#"{"info_type":"promo","title":"Flash Deal","message":"Hurry","start_time":"2024-02-01","end_date":"2024-02-10","cities":["Jakarta","Medan"],"promocode":"FLASH10"}"#,
    );
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let stg = support::read_script(dir.path(), "stg", "FLASH10.sql").expect("stg script");
    let prod = support::read_script(dir.path(), "prod", "FLASH10.sql").expect("prod script");
    assert_eq!(support::count_statements(&stg, "INSERT INTO infos"), 2);
    assert_eq!(support::count_statements(&prod, "INSERT INTO infos"), 2);
    assert!(prod.contains("'2024-02-10 23:59:59', 'Jakarta', 'FLASH10'"));
    assert!(support::read_script(dir.path(), "stg", "FlashDeal.sql").is_none());
}

#[tokio::test]
async fn repeated_generate_appends_to_the_same_script() {
    let dir = tempfile::tempdir().unwrap();
    let app = support::make_test_router(dir.path());
    let body = r#"{"title":"Daily","cities":["Bali"],"start_time":"2024-03-01","end_date":"2024-03-01"}"#;

    for _ in 0..2 {
        let resp = app
            .clone()
            .oneshot(support::json_post("/query/generate", body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let stg = support::read_script(dir.path(), "stg", "Daily.sql").unwrap();
    assert_eq!(support::count_statements(&stg, "INSERT INTO infos"), 2);
}

#[tokio::test]
async fn generate_keeps_going_with_invalid_dates() {
    let dir = tempfile::tempdir().unwrap();
    let app = support::make_test_router(dir.path());

    let req = support::json_post(
        "/query/generate",
        r#"{"title":"Broken Dates","start_time":"June 1st","cities":["Bali"]}"#,
    );
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let stg = support::read_script(dir.path(), "stg", "BrokenDates.sql").unwrap();
    assert!(stg.contains("'0001-01-01 00:00:00', '0001-01-01 23:59:59'"));
}

#[tokio::test]
async fn generate_ignores_non_json_bodies() {
    let dir = tempfile::tempdir().unwrap();
    let app = support::make_test_router(dir.path());

    let req = Request::builder()
        .method("POST")
        .uri("/query/generate")
        .header(CONTENT_TYPE, "text/plain")
        .body(Body::from(r#"{"title":"Summer Sale"}"#))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    support::assert_silent_rejection(resp, dir.path()).await;
}

#[tokio::test]
async fn generate_ignores_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let app = support::make_test_router(dir.path());

    let resp = app
        .oneshot(support::json_post("/query/generate", r#"{"title": "#))
        .await
        .unwrap();

    support::assert_silent_rejection(resp, dir.path()).await;
}

#[tokio::test]
async fn json_content_type_with_charset_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let app = support::make_test_router(dir.path());

    let req = Request::builder()
        .method("POST")
        .uri("/query/generate")
        .header(CONTENT_TYPE, "application/json; charset=utf-8")
        .body(Body::from(r#"{"title":"Charset","cities":["Bali"]}"#))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert!(support::read_script(dir.path(), "prod", "Charset.sql").is_some());
}

#[tokio::test]
async fn openapi_document_is_served() {
    let dir = tempfile::tempdir().unwrap();
    let app = support::make_test_router(dir.path());

    let req = Request::builder()
        .method("GET")
        .uri("/openapi.json")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = serde_json::from_str(&support::body_string(resp).await).unwrap();
    assert!(doc["paths"]["/query/generate"].is_object());
    assert!(doc["paths"]["/query/update"].is_object());
}

#[tokio::test]
async fn repeated_env_parameter_still_generates() {
    let dir = tempfile::tempdir().unwrap();
    let app = support::make_test_router(dir.path());

    let req = support::json_post(
        "/query/generate?env=stg&env=prod",
        r#"{"title":"Twice","cities":["Bali"]}"#,
    );
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert!(support::body_string(resp).await.is_empty());
    assert!(support::read_script(dir.path(), "stg", "Twice.sql").is_some());
    assert!(support::read_script(dir.path(), "prod", "Twice.sql").is_some());
}

#[tokio::test]
async fn null_fields_are_treated_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let app = support::make_test_router(dir.path());

    let req = support::json_post(
        "/query/generate",
        r#"{"title":"Null Msg","message":null,"promocode":null,"cities":["Bali"]}"#,
    );
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    for env in ["stg", "prod"] {
        let script = support::read_script(dir.path(), env, "NullMsg.sql").expect("script");
        assert_eq!(support::count_statements(&script, "INSERT INTO infos"), 1);
        assert!(script.contains("'Null Msg', '', "));
    }
}
