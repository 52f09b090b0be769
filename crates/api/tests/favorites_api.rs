//! HTTP-level tests for a user's favorites.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_asset, create_user, delete, get, post_json, post_raw, put_json,
};
use serde_json::json;

fn favorites_uri(user_id: &str) -> String {
    format!("/api/v1/users/{user_id}/favorites")
}

#[tokio::test]
async fn favorite_lifecycle() {
    let app = common::build_test_app();
    let user_id = create_user(&app).await;
    let asset_id = create_asset(&app, "chart", json!({ "title": "X" })).await;
    let uri = favorites_uri(&user_id);

    let response = post_json(app.clone(), &uri, json!({ "asset_id": asset_id })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let first = body_json(response).await;
    assert_eq!(first["asset"]["id"], asset_id.as_str());
    assert_eq!(first["asset"]["type"], "chart");
    assert!(first["deleted_at"].is_null());

    let json = body_json(get(app.clone(), &uri).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["pagination"]["total"], 1);
    assert_eq!(json["pagination"]["total_pages"], 1);
    assert_eq!(json["pagination"]["has_next"], false);

    let response = delete(app.clone(), &format!("{uri}/{asset_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = body_json(get(app.clone(), &uri).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
    assert_eq!(json["pagination"]["total"], 0);
    assert_eq!(json["pagination"]["total_pages"], 1);

    let response = post_json(app, &uri, json!({ "asset_id": asset_id })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let second = body_json(response).await;
    assert_ne!(second["id"], first["id"]);
}

#[tokio::test]
async fn duplicate_favorite_returns_409() {
    let app = common::build_test_app();
    let user_id = create_user(&app).await;
    let asset_id = create_asset(&app, "insight", json!({ "text": "y" })).await;
    let uri = favorites_uri(&user_id);

    post_json(app.clone(), &uri, json!({ "asset_id": asset_id })).await;
    let response = post_json(app, &uri, json!({ "asset_id": asset_id })).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "ALREADY_FAVORITED");
}

#[tokio::test]
async fn add_checks_user_before_asset() {
    let app = common::build_test_app();
    let missing = "00000000-0000-0000-0000-000000000001";

    let response = post_json(app.clone(), &favorites_uri(missing), json!({ "asset_id": missing })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "USER_NOT_FOUND");

    let user_id = create_user(&app).await;
    let response = post_json(app, &favorites_uri(&user_id), json!({ "asset_id": missing })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "ASSET_NOT_FOUND");
}

#[tokio::test]
async fn add_requires_asset_id() {
    let app = common::build_test_app();
    let user_id = create_user(&app).await;

    let response = post_json(app, &favorites_uri(&user_id), json!({ "description": "hi" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "asset_id is required");
}

#[tokio::test]
async fn malformed_body_returns_400() {
    let app = common::build_test_app();
    let user_id = create_user(&app).await;

    let response = post_raw(app, &favorites_uri(&user_id), "{not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn empty_description_on_add_is_stored_as_none() {
    let app = common::build_test_app();
    let user_id = create_user(&app).await;
    let asset_id = create_asset(&app, "audience", json!({ "segment": "all" })).await;

    let response = post_json(
        app,
        &favorites_uri(&user_id),
        json!({ "asset_id": asset_id, "description": "" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(body_json(response).await["description"].is_null());
}

#[tokio::test]
async fn update_description_returns_updated_favorite() {
    let app = common::build_test_app();
    let user_id = create_user(&app).await;
    let asset_id = create_asset(&app, "chart", json!({ "title": "X" })).await;
    let uri = favorites_uri(&user_id);
    post_json(app.clone(), &uri, json!({ "asset_id": asset_id, "description": "old" })).await;

    let response = put_json(
        app.clone(),
        &format!("{uri}/{asset_id}"),
        json!({ "description": "my revenue chart" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["description"], "my revenue chart");

    let json = body_json(get(app, &uri).await).await;
    assert_eq!(json["data"][0]["description"], "my revenue chart");
}

#[tokio::test]
async fn update_with_empty_description_returns_400() {
    let app = common::build_test_app();
    let user_id = create_user(&app).await;
    let asset_id = create_asset(&app, "chart", json!({ "title": "X" })).await;
    let uri = favorites_uri(&user_id);
    post_json(app.clone(), &uri, json!({ "asset_id": asset_id })).await;

    let response = put_json(app, &format!("{uri}/{asset_id}"), json!({ "description": "" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "description is required");
}

#[tokio::test]
async fn update_on_non_favorited_asset_returns_404() {
    let app = common::build_test_app();
    let user_id = create_user(&app).await;
    let asset_id = create_asset(&app, "chart", json!({ "title": "X" })).await;

    let response = put_json(
        app,
        &format!("{}/{asset_id}", favorites_uri(&user_id)),
        json!({ "description": "never added" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_IN_FAVORITES");
}

#[tokio::test]
async fn remove_twice_returns_404_the_second_time() {
    let app = common::build_test_app();
    let user_id = create_user(&app).await;
    let asset_id = create_asset(&app, "insight", json!({ "text": "z" })).await;
    let uri = favorites_uri(&user_id);
    post_json(app.clone(), &uri, json!({ "asset_id": asset_id })).await;

    let item = format!("{uri}/{asset_id}");
    assert_eq!(delete(app.clone(), &item).await.status(), StatusCode::NO_CONTENT);

    let response = delete(app, &item).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_IN_FAVORITES");
}

#[tokio::test]
async fn list_favorites_pages_and_filters() {
    let app = common::build_test_app();
    let user_id = create_user(&app).await;
    let uri = favorites_uri(&user_id);
    for (kind, n) in [("chart", 1), ("insight", 2), ("chart", 3), ("audience", 4)] {
        let asset_id = create_asset(&app, kind, json!({ "n": n })).await;
        post_json(app.clone(), &uri, json!({ "asset_id": asset_id })).await;
    }

    let json = body_json(get(app.clone(), &format!("{uri}?page=2&limit=3")).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["asset"]["data"]["n"], 1);
    assert_eq!(json["pagination"]["total_pages"], 2);
    assert_eq!(json["pagination"]["has_prev"], true);
    assert_eq!(json["pagination"]["has_next"], false);

    let json = body_json(get(app.clone(), &format!("{uri}?type=chart")).await).await;
    assert_eq!(json["pagination"]["total"], 2);
    assert_eq!(json["data"][0]["asset"]["data"]["n"], 3);

    let response = get(app, &format!("{uri}?type=report")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn deleting_user_removes_their_favorites() {
    let app = common::build_test_app();
    let user_id = create_user(&app).await;
    let asset_id = create_asset(&app, "chart", json!({ "title": "X" })).await;
    let uri = favorites_uri(&user_id);
    post_json(app.clone(), &uri, json!({ "asset_id": asset_id })).await;

    let response = delete(app.clone(), &format!("/api/v1/users/{user_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "USER_NOT_FOUND");
}

#[tokio::test]
async fn deleting_asset_drops_it_from_favorites() {
    let app = common::build_test_app();
    let user_id = create_user(&app).await;
    let kept = create_asset(&app, "chart", json!({ "title": "kept" })).await;
    let dropped = create_asset(&app, "chart", json!({ "title": "dropped" })).await;
    let uri = favorites_uri(&user_id);
    post_json(app.clone(), &uri, json!({ "asset_id": kept })).await;
    post_json(app.clone(), &uri, json!({ "asset_id": dropped })).await;

    delete(app.clone(), &format!("/api/v1/assets/{dropped}")).await;

    let json = body_json(get(app, &uri).await).await;
    assert_eq!(json["pagination"]["total"], 1);
    assert_eq!(json["data"][0]["asset"]["id"], kept.as_str());
}
