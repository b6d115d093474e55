
use reqwest::StatusCode;
use serde_json::{json, Value};
use test_utils::{detail_fields, TestApp};

fn project_body(title: &str, order: i64) -> Value {
    json!({
        "title": title,
        "description": "A realtime dashboard for fleet telemetry",
        "imageUrl": "https://cdn.example.com/fleet.png",
        "githubUrl": "github.com/example/fleet",
        "liveUrl": "",
        "technologies": ["Rust", " Actix "],
        "featured": true,
        "displayOrder": order
    })
}

#[actix_rt::test]
async fn project_crud_round_trip() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let created = app.post_json("/api/projects", &token, &project_body("Fleet", 1)).await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let project: Value = created.json().await.unwrap();
    let id = project["id"].as_i64().unwrap();
    assert_eq!(project["githubUrl"], "https://github.com/example/fleet");
    assert_eq!(project["technologies"], json!(["Rust", "Actix"]));

    let fetched = app.get(&format!("/api/projects/{}", id)).await;
    assert_eq!(fetched.status(), StatusCode::OK);

    let updated = app
        .put_json(&format!("/api/projects/{}", id), &token, &json!({"title": "Fleet v2"}))
        .await;
    assert_eq!(updated.status(), StatusCode::OK);
    let updated: Value = updated.json().await.unwrap();
    assert_eq!(updated["title"], "Fleet v2");
    assert_eq!(updated["description"], project["description"]);

    let deleted = app.delete(&format!("/api/projects/{}", id), &token).await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let missing = app.get(&format!("/api/projects/{}", id)).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn missing_ids_are_not_found_for_update_and_delete() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let update = app.put_json("/api/skills/999", &token, &json!({"name": "Go"})).await;
    assert_eq!(update.status(), StatusCode::NOT_FOUND);

    let delete = app.delete("/api/testimonials/999", &token).await;
    assert_eq!(delete.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn lists_follow_display_order() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    for (title, order) in [("Third", 3), ("First", 1), ("Second", 2)] {
        let res = app.post_json("/api/projects", &token, &project_body(title, order)).await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let list: Vec<Value> = app.get("/api/projects").await.json().await.unwrap();
    let titles: Vec<&str> = list.iter().map(|p| p["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}

#[actix_rt::test]
async fn public_list_reflects_admin_mutations_immediately() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let before: Vec<Value> = app.get("/api/skills").await.json().await.unwrap();
    assert!(before.is_empty());

    let created = app
        .post_json(
            "/api/skills",
            &token,
            &json!({"name": "Rust", "category": "Backend", "proficiency": 90}),
        )
        .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let after: Vec<Value> = app.get("/api/skills").await.json().await.unwrap();
    assert_eq!(after.len(), 1);
    assert_eq!(after[0]["category"], "Backend");
}

#[actix_rt::test]
async fn invalid_skill_reports_each_field() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let res = app
        .post_json(
            "/api/skills",
            &token,
            &json!({"name": "", "category": "Cooking", "proficiency": 150}),
        )
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(detail_fields(&body), vec!["category", "name", "proficiency"]);
}

#[actix_rt::test]
async fn testimonial_rating_out_of_range_is_rejected() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let res = app
        .post_json(
            "/api/testimonials",
            &token,
            &json!({
                "name": "Ada Lovelace",
                "role": "CTO",
                "company": "Analytical Engines",
                "content": "Delivered ahead of schedule and well tested.",
                "rating": 6
            }),
        )
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(detail_fields(&body), vec!["rating"]);
}

#[actix_rt::test]
async fn whitespace_only_testimonial_content_is_rejected() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let res = app
        .post_json(
            "/api/testimonials",
            &token,
            &json!({
                "name": "Ada Lovelace",
                "role": "CTO",
                "content": "          ",
                "rating": 5
            }),
        )
        .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(detail_fields(&body), vec!["content"]);

    let res = app
        .post_json(
            "/api/testimonials",
            &token,
            &json!({
                "name": "Ada Lovelace",
                "role": "CTO",
                "content": "   Solid work, would hire again.   ",
                "rating": 5
            }),
        )
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await.unwrap();
    assert_eq!(created["content"], "Solid work, would hire again.");
}

#[actix_rt::test]
async fn malformed_json_is_a_bad_request() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let res = app
        .client
        .post(app.url("/api/projects"))
        .bearer_auth(&token)
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn mutations_require_a_token() {
    let app = TestApp::spawn().await;

    let res = app
        .client
        .post(app.url("/api/projects"))
        .json(&project_body("Anonymous", 0))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let list = app.get("/api/projects").await;
    assert_eq!(list.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn non_admin_tokens_are_forbidden_on_content() {
    let app = TestApp::spawn().await;
    let token = app.viewer_token().await;

    let res = app.post_json("/api/projects", &token, &project_body("Viewer", 0)).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[actix_rt::test]
async fn unknown_routes_are_json_404s() {
    let app = TestApp::spawn().await;
    let token = app.admin_token().await;

    let res = app
        .client
        .get(app.url("/api/nothing-here"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert!(body["error"].is_string());
}
