
use reqwest::StatusCode;
use serde_json::{json, Value};
use test_utils::{detail_fields, TestApp};

#[actix_rt::test]
async fn about_is_seeded_and_public() {
    let app = TestApp::spawn().await;

    let res = app.get("/api/about").await;
    assert_eq!(res.status(), StatusCode::OK);

    let about: Value = res.json().await.unwrap();
    assert!(about.get("headline").is_some());
    assert!(about.get("availableForWork").is_some());
}

#[actix_rt::test]
async fn partial_about_update_keeps_other_fields() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let first = app
        .put_json(
            "/api/about",
            &token,
            &json!({"headline": "Systems engineer", "location": "Lagos"}),
        )
        .await;
    assert_eq!(first.status(), StatusCode::OK);

    let second: Value = app
        .put_json("/api/about", &token, &json!({"githubUrl": "github.com/example"}))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(second["headline"], "Systems engineer");
    assert_eq!(second["location"], "Lagos");
    assert_eq!(second["githubUrl"], "https://github.com/example");

    let public: Value = app.get("/api/about").await.json().await.unwrap();
    assert_eq!(public["headline"], "Systems engineer");
}

#[actix_rt::test]
async fn about_rejects_bad_contact_details() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let res = app
        .put_json("/api/about", &token, &json!({"email": "nobody", "yearsExperience": -1}))
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(detail_fields(&body), vec!["email", "yearsExperience"]);
}

#[actix_rt::test]
async fn legal_update_is_sanitized_and_served() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let res = app
        .put_json(
            "/api/legal/privacy_policy",
            &token,
            &json!({"content": "<h2>Privacy</h2><p>We keep nothing.</p><script>alert(1)</script>"}),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let doc: Value = app.get("/api/legal/privacy_policy").await.json().await.unwrap();
    let content = doc["content"].as_str().unwrap();
    assert!(content.contains("<p>We keep nothing.</p>"));
    assert!(!content.contains("script"));
    assert_eq!(doc["docType"], "privacy_policy");
}

#[actix_rt::test]
async fn legal_content_that_sanitizes_to_nothing_is_rejected() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let res = app
        .put_json(
            "/api/legal/terms_of_service",
            &token,
            &json!({"content": "<script>alert(1)</script>"}),
        )
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(detail_fields(&body), vec!["content"]);
}

#[actix_rt::test]
async fn unknown_legal_type_is_not_found() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let res = app.get("/api/legal/cookie_policy").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = app
        .put_json("/api/legal/cookie_policy", &token, &json!({"content": "<p>Cookies</p>"}))
        .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
