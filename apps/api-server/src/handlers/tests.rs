use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};
use uuid::Uuid;

use inkpost_shared::dto::{CategoryResponse, PostResponse};

use super::configure_routes;
use crate::state::AppState;

async fn seeded_state() -> AppState {
    let state = AppState::in_memory();
    state
        .seed_categories(&["Technology".to_string(), "Travel".to_string()])
        .await;
    state
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .configure(configure_routes),
        )
        .await
    };
}

macro_rules! create {
    ($app:expr, $body:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json($body)
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let post: PostResponse = test::read_body_json(resp).await;
        post
    }};
}

async fn category_id(state: &AppState, name: &str) -> Uuid {
    state
        .categories
        .list()
        .await
        .unwrap()
        .into_iter()
        .find(|c| c.name == name)
        .map(|c| c.id)
        .unwrap()
}

#[actix_web::test]
async fn test_create_then_get_round_trip() {
    let state = seeded_state().await;
    let app = app!(state);

    let created = create!(app, json!({ "title": "Hello", "content": "World" }));
    assert_eq!(created.title, "Hello");
    assert_eq!(created.category, None);
    assert_eq!(created.created_at, created.updated_at);

    let req = test::TestRequest::get()
        .uri(&format!("/api/posts/{}", created.id))
        .to_request();
    let fetched: PostResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn test_create_with_category_resolves_it() {
    let state = seeded_state().await;
    let tech = category_id(&state, "Technology").await;
    let app = app!(state);

    let created = create!(
        app,
        json!({
            "title": "Rust",
            "content": "Ownership",
            "category": tech.to_string(),
            "featuredImage": "https://img.example/rust.png"
        })
    );

    let category = created.category.expect("category resolved");
    assert_eq!(category.id, tech);
    assert_eq!(category.name, "Technology");
    assert_eq!(
        created.featured_image.as_deref(),
        Some("https://img.example/rust.png")
    );
}

#[actix_web::test]
async fn test_create_with_missing_fields_is_rejected() {
    let state = seeded_state().await;
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({ "title": "", "category": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["title", "content"]);

    let req = test::TestRequest::get().uri("/api/posts").to_request();
    let listed: Vec<PostResponse> = test::call_and_read_body_json(&app, req).await;
    assert!(listed.is_empty());
}

#[actix_web::test]
async fn test_create_with_null_title_reports_field_error() {
    let state = seeded_state().await;
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({ "title": null, "content": "World" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    let errors = body["errors"].as_array().expect("field errors");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["field"], "title");
    assert_eq!(errors[0]["message"], "Title is required");
}

#[actix_web::test]
async fn test_create_accepts_whitespace_only_title() {
    let state = seeded_state().await;
    let app = app!(state);

    let created = create!(app, json!({ "title": "   ", "content": "World" }));

    assert_eq!(created.title, "   ");
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let state = seeded_state().await;
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_get_unknown_or_malformed_id_is_not_found() {
    let state = seeded_state().await;
    let app = app!(state);

    for uri in [
        format!("/api/posts/{}", Uuid::new_v4()),
        "/api/posts/not-an-id".to_string(),
    ] {
        let req = test::TestRequest::get().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Post not found");
    }
}

#[actix_web::test]
async fn test_list_filters_by_category_and_search() {
    let state = seeded_state().await;
    let tech = category_id(&state, "Technology").await;
    let travel = category_id(&state, "Travel").await;
    let app = app!(state);

    create!(app, json!({ "title": "Rust tips", "content": "a", "category": tech.to_string() }));
    create!(app, json!({ "title": "Lisbon", "content": "rusty trams", "category": travel.to_string() }));
    create!(app, json!({ "title": "Untitled", "content": "nothing here" }));

    let req = test::TestRequest::get()
        .uri(&format!("/api/posts?category={tech}"))
        .to_request();
    let listed: Vec<PostResponse> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Rust tips");

    let req = test::TestRequest::get()
        .uri("/api/posts?search=RUST")
        .to_request();
    let listed: Vec<PostResponse> = test::call_and_read_body_json(&app, req).await;
    let titles: Vec<_> = listed.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Lisbon", "Rust tips"]);

    let req = test::TestRequest::get()
        .uri(&format!("/api/posts?search=rust&category={travel}"))
        .to_request();
    let listed: Vec<PostResponse> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Lisbon");
}

#[actix_web::test]
async fn test_list_without_filters_is_newest_first() {
    let state = seeded_state().await;
    let app = app!(state);

    let first = create!(app, json!({ "title": "First", "content": "a" }));
    let second = create!(app, json!({ "title": "Second", "content": "b" }));

    let req = test::TestRequest::get()
        .uri("/api/posts?search=&category=")
        .to_request();
    let listed: Vec<PostResponse> = test::call_and_read_body_json(&app, req).await;

    let ids: Vec<Uuid> = listed.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[actix_web::test]
async fn test_list_with_malformed_category_is_empty() {
    let state = seeded_state().await;
    let app = app!(state);
    create!(app, json!({ "title": "Any", "content": "post" }));

    let req = test::TestRequest::get()
        .uri("/api/posts?category=bogus")
        .to_request();
    let listed: Vec<PostResponse> = test::call_and_read_body_json(&app, req).await;

    assert!(listed.is_empty());
}

#[actix_web::test]
async fn test_update_replaces_every_field() {
    let state = seeded_state().await;
    let travel = category_id(&state, "Travel").await;
    let app = app!(state);

    let created = create!(
        app,
        json!({ "title": "Draft", "content": "v1", "featuredImage": "old.png" })
    );

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{}", created.id))
        .set_json(json!({ "title": "Final", "content": "v2", "category": travel.to_string() }))
        .to_request();
    let updated: PostResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Final");
    assert_eq!(updated.content, "v2");
    assert_eq!(updated.featured_image, None);
    assert_eq!(updated.category.map(|c| c.id), Some(travel));
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    let req = test::TestRequest::get()
        .uri(&format!("/api/posts/{}", created.id))
        .to_request();
    let fetched: PostResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched.title, "Final");
}

#[actix_web::test]
async fn test_update_validates_and_requires_existing_post() {
    let state = seeded_state().await;
    let app = app!(state);
    let created = create!(app, json!({ "title": "Keep", "content": "me" }));

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{}", created.id))
        .set_json(json!({ "title": "", "content": "x" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{}", Uuid::new_v4()))
        .set_json(json!({ "title": "a", "content": "b" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_then_get_is_not_found() {
    let state = seeded_state().await;
    let app = app!(state);
    let created = create!(app, json!({ "title": "Bye", "content": "soon" }));
    let uri = format!("/api/posts/{}", created.id);

    let req = test::TestRequest::delete().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_list_categories_has_no_duplicates() {
    let state = seeded_state().await;
    state
        .seed_categories(&["Technology".to_string(), "Food".to_string()])
        .await;
    let app = app!(state);

    let req = test::TestRequest::get().uri("/api/categories").to_request();
    let categories: Vec<CategoryResponse> = test::call_and_read_body_json(&app, req).await;

    let mut names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Food", "Technology", "Travel"]);
}

#[actix_web::test]
async fn test_health_reports_storage() {
    let state = AppState::in_memory();
    let app = app!(state);

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"], "memory");
}
