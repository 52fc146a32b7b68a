use std::collections::HashSet;

use actix_web::http::{StatusCode, header::ContentType};
use actix_web::{App, test, web};
use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
use serde_json::json;
use uuid::Uuid;

use blog_core::domain::{Comment, Post};
use blog_shared::ErrorResponse;

use super::configure_routes;
use crate::state::AppState;

macro_rules! init_app {
    () => {
        init_app!(AppState::in_memory().await)
    };
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(configure_routes),
        )
        .await
    };
}

/// State whose store fails the next query with `boom`.
fn failing_state() -> AppState {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_errors([DbErr::Custom("boom".to_string())])
        .into_connection();
    AppState::new(db)
}

fn post_json(uri: &str, body: serde_json::Value) -> test::TestRequest {
    test::TestRequest::post().uri(uri).set_json(body)
}

#[actix_web::test]
async fn test_create_post() {
    let app = init_app!();

    let req = post_json("/posts", json!({"title": "Test Post", "content": "Test post content."}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
    assert_eq!(body["title"], "Test Post");
    assert_eq!(body["content"], "Test post content.");
    assert!(body["published_on"].is_null());
    assert!(body["created_on"].is_string());
}

#[actix_web::test]
async fn test_create_post_trims_fields() {
    let app = init_app!();

    let req = post_json("/posts", json!({"title": "  Spaced  ", "content": "\tBody\n"})).to_request();
    let post: Post = test::call_and_read_body_json(&app, req).await;
    assert_eq!(post.title, "Spaced");
    assert_eq!(post.content, "Body");
}

#[actix_web::test]
async fn test_create_post_with_missing_or_blank_fields_is_bad_request() {
    let app = init_app!();

    let bodies = [
        json!({"content": "Test post content."}),
        json!({"title": "Test Post"}),
        json!({"title": null, "content": "Test post content."}),
        json!({"title": "Test Post", "content": null}),
        json!({"title": "   ", "content": "y"}),
        json!({"title": "x", "content": " \n\t "}),
        json!({}),
    ];

    for body in bodies {
        let req = post_json("/posts", body.clone()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {body}");

        let err: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(err.status_code, 400);
        assert_eq!(err.message, "Title and content must not be empty");
    }
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/posts")
        .insert_header(ContentType::json())
        .set_payload("{\"title\": \"unterminated")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let err: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(err.status_code, 400);
    assert!(err.message.starts_with("Invalid post data"), "{}", err.message);
}

#[actix_web::test]
async fn test_malformed_comment_json_is_bad_request() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/posts/comments")
        .insert_header(ContentType::json())
        .set_payload("{\"post_id\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let err: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(err.status_code, 400);
    assert!(err.message.starts_with("err parsing json"), "{}", err.message);
}

#[actix_web::test]
async fn test_comment_body_without_json_content_type_is_bad_request() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/posts/comments")
        .insert_header(ContentType::plaintext())
        .set_payload(r#"{"post_id": "abc", "content": "x"}"#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let err: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(err.status_code, 400);
    assert!(err.message.starts_with("err parsing json"), "{}", err.message);
}

#[actix_web::test]
async fn test_create_post_store_failure_is_server_error() {
    let app = init_app!(failing_state());

    let req = post_json("/posts", json!({"title": "Test Post", "content": "Test Content"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let err: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(err.status_code, 500);
    assert!(err.message.starts_with("Unable to create new post"), "{}", err.message);
    assert!(err.message.contains("boom"), "{}", err.message);
}

#[actix_web::test]
async fn test_list_posts_store_failure_is_server_error() {
    let app = init_app!(failing_state());

    let req = test::TestRequest::get().uri("/posts").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let err: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(err.status_code, 500);
    assert!(err.message.starts_with("Error reading all posts"), "{}", err.message);
    assert!(err.message.contains("boom"), "{}", err.message);
}

#[actix_web::test]
async fn test_list_comments_store_failure_is_server_error() {
    let app = init_app!(failing_state());

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{}/comments", Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let err: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(err.status_code, 500);
    assert!(err.message.starts_with("Error reading comments"), "{}", err.message);
    assert!(err.message.contains("boom"), "{}", err.message);
}

#[actix_web::test]
async fn test_list_posts() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/posts").to_request();
    let posts: Vec<Post> = test::call_and_read_body_json(&app, req).await;
    assert!(posts.is_empty());

    let mut created = HashSet::new();
    for i in 0..3 {
        let req = post_json("/posts", json!({"title": format!("Post {i}"), "content": "c"}))
            .to_request();
        let post: Post = test::call_and_read_body_json(&app, req).await;
        created.insert(post.id);
    }

    let req = test::TestRequest::get().uri("/posts").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let posts: Vec<Post> = test::read_body_json(resp).await;
    assert_eq!(posts.len(), 3);
    let listed: HashSet<Uuid> = posts.iter().map(|p| p.id).collect();
    assert_eq!(listed, created);
}

#[actix_web::test]
async fn test_post_comment() {
    let app = init_app!();

    let req = post_json("/posts", json!({"title": "Test Post", "content": "Test Content"}))
        .to_request();
    let post: Post = test::call_and_read_body_json(&app, req).await;
    let post_id = post.id.to_string();

    let req = post_json(
        "/posts/comments",
        json!({"post_id": post_id, "content": "Test comment content."}),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let comment: Comment = test::read_body_json(resp).await;
    assert_eq!(comment.post_id, post_id);
    assert_eq!(comment.content, "Test comment content.");
}

#[actix_web::test]
async fn test_post_comment_with_missing_or_blank_fields_is_bad_request() {
    let app = init_app!();
    let post_id = Uuid::new_v4().to_string();

    let bodies = [
        json!({"content": "x"}),
        json!({"post_id": post_id}),
        json!({"post_id": post_id, "content": "    "}),
        json!({"post_id": "  ", "content": "x"}),
    ];

    for body in bodies {
        let req = post_json("/posts/comments", body.clone()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {body}");

        let err: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(err.message, "Post id and content cannot be empty");
    }
}

#[actix_web::test]
async fn test_post_comment_on_unknown_post_is_server_error() {
    let app = init_app!();

    let req = post_json(
        "/posts/comments",
        json!({"post_id": Uuid::new_v4().to_string(), "content": "orphan"}),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let err: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(err.status_code, 500);
    assert!(err.message.starts_with("err creating comment"), "{}", err.message);
}

#[actix_web::test]
async fn test_get_post_comments() {
    let app = init_app!();

    let req = post_json("/posts", json!({"title": "Test Post", "content": "Test Content"}))
        .to_request();
    let post: Post = test::call_and_read_body_json(&app, req).await;
    let req = post_json("/posts", json!({"title": "Other", "content": "Other"})).to_request();
    let other: Post = test::call_and_read_body_json(&app, req).await;

    let req = post_json(
        "/posts/comments",
        json!({"post_id": post.id.to_string(), "content": "Test Comment"}),
    )
    .to_request();
    let created: Comment = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{}/comments", post.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let comments: Vec<Comment> = test::read_body_json(resp).await;
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0], created);
    assert_eq!(comments[0].content, "Test Comment");

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{}/comments", other.id))
        .to_request();
    let comments: Vec<Comment> = test::call_and_read_body_json(&app, req).await;
    assert!(comments.is_empty());
}

#[actix_web::test]
async fn test_publish_post() {
    let app = init_app!();

    let req = post_json("/posts", json!({"title": "Draft", "content": "Soon"})).to_request();
    let post: Post = test::call_and_read_body_json(&app, req).await;
    let uri = format!("/posts/{}/publish", post.id);

    let req = test::TestRequest::post().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let published: Post = test::read_body_json(resp).await;
    assert_eq!(published.id, post.id);
    assert!(published.published_on.is_some());

    let req = test::TestRequest::post().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::get().uri("/posts").to_request();
    let posts: Vec<Post> = test::call_and_read_body_json(&app, req).await;
    assert!(posts[0].published_on.is_some());
}

#[actix_web::test]
async fn test_publish_unknown_post_is_not_found() {
    let app = init_app!();

    for id in [Uuid::new_v4().to_string(), "not-a-uuid".to_string()] {
        let req = test::TestRequest::post()
            .uri(&format!("/posts/{id}/publish"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let err: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(err.status_code, 404);
    }
}

#[actix_web::test]
async fn test_health_check() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
}
