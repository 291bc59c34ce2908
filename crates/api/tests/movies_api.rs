//! HTTP-level integration tests for the `/movies` endpoints.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the router.
//! Every test starts from a fresh store seeded with the embedded dataset.

mod common;

use std::collections::HashSet;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{
    body_json, build_test_app, build_test_app_with, delete, get, patch_json, post_json, send,
    test_config, INCEPTION_ID, SHAWSHANK_ID,
};
use movies_core::genre::GenrePolicy;
use serde_json::{json, Value};

fn arrival() -> Value {
    json!({
        "title": "Arrival",
        "year": 2016,
        "director": "Denis Villeneuve",
        "duration": 116,
        "poster": "https://example.com/arrival.jpg",
        "genre": ["Drama", "Sci-Fi"],
        "rate": 7.9
    })
}

// ---------------------------------------------------------------------------
// Root
// ---------------------------------------------------------------------------

#[tokio::test]
async fn root_returns_greeting() {
    let (app, _) = build_test_app();
    let response = get(&app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "message": "hola mundo" }));
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_returns_whole_seed_in_order() {
    let (app, store) = build_test_app();
    let response = get(&app, "/movies").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json.as_array().expect("body should be an array");
    assert_eq!(data.len(), store.len().await);
    assert_eq!(data[0]["id"], SHAWSHANK_ID);
    assert_eq!(data[0]["title"], "The Shawshank Redemption");
}

#[tokio::test]
async fn genre_filter_is_case_insensitive_and_order_preserving() {
    let (app, store) = build_test_app();

    let expected: Vec<String> = store
        .read()
        .await
        .iter()
        .filter(|m| m.genre.iter().any(|g| g.to_lowercase() == "drama"))
        .map(|m| m.id.clone())
        .collect();
    assert!(!expected.is_empty());

    for query in ["drama", "DRAMA", "Drama"] {
        let json = body_json(get(&app, &format!("/movies?genre={query}")).await).await;
        let ids: Vec<String> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, expected, "genre={query}");
    }
}

#[tokio::test]
async fn unknown_genre_returns_empty_list() {
    let (app, _) = build_test_app();
    let json = body_json(get(&app, "/movies?genre=western").await).await;
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn empty_genre_returns_all() {
    let (app, store) = build_test_app();
    let json = body_json(get(&app, "/movies?genre=").await).await;
    assert_eq!(json.as_array().unwrap().len(), store.len().await);
}

// ---------------------------------------------------------------------------
// Get by id
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_existing_movie() {
    let (app, _) = build_test_app();
    let response = get(&app, &format!("/movies/{INCEPTION_ID}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"], "Inception");
    assert_eq!(json["genre"], json!(["Action", "Adventure", "Sci-Fi"]));
}

#[tokio::test]
async fn get_unknown_movie_returns_404_message() {
    let (app, _) = build_test_app();
    for id in ["does-not-exist", "00000000-0000-0000-0000-000000000000"] {
        let response = get(&app, &format!("/movies/{id}")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Pelicula no encontrada" })
        );
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_returns_201_with_fresh_id_and_lists_it() {
    let (app, store) = build_test_app();
    let before = store.len().await;
    let mut seen: HashSet<String> = store.read().await.iter().map(|m| m.id.clone()).collect();

    for _ in 0..3 {
        let response = post_json(&app, "/movies", arrival()).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        let id = json["id"].as_str().expect("id should be a string").to_string();
        assert!(uuid::Uuid::parse_str(&id).is_ok());
        assert!(seen.insert(id.clone()), "id {id} was reused");
        assert_eq!(json["title"], "Arrival");
        assert_eq!(json["rate"], 7.9);

        let fetched = body_json(get(&app, &format!("/movies/{id}")).await).await;
        assert_eq!(fetched, json);
    }

    assert_eq!(store.len().await, before + 3);
    let listed = body_json(get(&app, "/movies").await).await;
    assert_eq!(listed.as_array().unwrap().len(), before + 3);
}

#[tokio::test]
async fn create_ignores_client_supplied_id() {
    let (app, _) = build_test_app();
    let mut payload = arrival();
    payload["id"] = json!(SHAWSHANK_ID);

    let json = body_json(post_json(&app, "/movies", payload).await).await;
    assert_ne!(json["id"], SHAWSHANK_ID);
}

#[tokio::test]
async fn create_without_rate_defaults_to_five() {
    let (app, _) = build_test_app();
    let mut payload = arrival();
    payload.as_object_mut().unwrap().remove("rate");

    let response = post_json(&app, "/movies", payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["rate"], 5.0);
}

#[tokio::test]
async fn create_canonicalizes_genre_spelling() {
    let (app, _) = build_test_app();
    let mut payload = arrival();
    payload["genre"] = json!(["drama", "sci-fi"]);

    let json = body_json(post_json(&app, "/movies", payload).await).await;
    assert_eq!(json["genre"], json!(["Drama", "Sci-Fi"]));
}

#[tokio::test]
async fn create_invalid_payloads_return_400_and_leave_store_unchanged() {
    let (app, store) = build_test_app();
    let before = store.len().await;

    let mut missing_title = arrival();
    missing_title.as_object_mut().unwrap().remove("title");
    let mut wrong_year = arrival();
    wrong_year["year"] = json!("2016");
    let mut bad_genre = arrival();
    bad_genre["genre"] = json!(["Western"]);
    let mut high_rate = arrival();
    high_rate["rate"] = json!(11);

    for payload in [missing_title, wrong_year, bad_genre, high_rate, json!({}), json!([])] {
        let response = post_json(&app, "/movies", payload.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "payload: {payload}");

        let json = body_json(response).await;
        let errors = json["error"].as_array().expect("error should be an array");
        assert!(!errors.is_empty());
    }

    assert_eq!(store.len().await, before);
}

#[tokio::test]
async fn create_reports_all_violations_at_once() {
    let (app, _) = build_test_app();
    let response = post_json(
        &app,
        "/movies",
        json!({ "title": "", "year": 1800, "duration": 0 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    let fields: Vec<&str> = json["error"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["field"].as_str().unwrap())
        .collect();
    assert_eq!(
        fields,
        vec!["title", "year", "director", "duration", "poster", "genre"]
    );
    assert_eq!(json["error"][0]["code"], "too_small");
    assert_eq!(json["error"][2]["code"], "required");
}

#[tokio::test]
async fn create_with_malformed_json_returns_400() {
    let (app, store) = build_test_app();
    let before = store.len().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/movies")
        .header("content-type", "application/json")
        .body(Body::from("{\"title\": "))
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
    assert_eq!(store.len().await, before);
}

#[tokio::test]
async fn create_without_json_content_type_returns_400() {
    let (app, _) = build_test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/movies")
        .body(Body::from(arrival().to_string()))
        .unwrap();

    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn open_genre_policy_accepts_unlisted_genres() {
    let config = movies_api::config::ServerConfig {
        genre_policy: GenrePolicy::Open,
        ..test_config()
    };
    let (app, _) = build_test_app_with(config);
    let mut payload = arrival();
    payload["genre"] = json!(["Western"]);

    let response = post_json(&app, "/movies", payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["genre"], json!(["Western"]));
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_existing_removes_exactly_one() {
    let (app, store) = build_test_app();
    let before = store.len().await;

    let response = delete(&app, &format!("/movies/{SHAWSHANK_ID}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Pelicula borrada" })
    );

    assert_eq!(store.len().await, before - 1);
    let response = get(&app, &format!("/movies/{SHAWSHANK_ID}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_returns_404_and_keeps_store() {
    let (app, store) = build_test_app();
    let before = store.len().await;

    let response = delete(&app, "/movies/not-a-movie").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Pelicula no encontrada" })
    );
    assert_eq!(store.len().await, before);
}

#[tokio::test]
async fn deleting_twice_returns_404_the_second_time() {
    let (app, _) = build_test_app();
    let uri = format!("/movies/{INCEPTION_ID}");

    assert_eq!(delete(&app, &uri).await.status(), StatusCode::OK);
    assert_eq!(delete(&app, &uri).await.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Partial update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn patch_changes_only_supplied_fields() {
    let (app, _) = build_test_app();
    let uri = format!("/movies/{SHAWSHANK_ID}");
    let original = body_json(get(&app, &uri).await).await;

    let response = patch_json(&app, &uri, json!({ "year": 1995, "rate": 9.5 })).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;

    let mut expected = original.clone();
    expected["year"] = json!(1995);
    expected["rate"] = json!(9.5);
    assert_eq!(updated, expected);

    // The stored record matches what PATCH returned.
    assert_eq!(body_json(get(&app, &uri).await).await, expected);
}

#[tokio::test]
async fn patch_cannot_change_id() {
    let (app, store) = build_test_app();
    let uri = format!("/movies/{SHAWSHANK_ID}");

    let response = patch_json(&app, &uri, json!({ "id": "hijacked", "title": "Renamed" })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], SHAWSHANK_ID);
    assert_eq!(json["title"], "Renamed");
    assert!(store.read().await.iter().all(|m| m.id != "hijacked"));
}

#[tokio::test]
async fn patch_with_empty_body_is_a_no_op() {
    let (app, _) = build_test_app();
    let uri = format!("/movies/{INCEPTION_ID}");
    let original = body_json(get(&app, &uri).await).await;

    let response = patch_json(&app, &uri, json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, original);
}

#[tokio::test]
async fn patch_invalid_payload_returns_400_and_keeps_record() {
    let (app, _) = build_test_app();
    let uri = format!("/movies/{INCEPTION_ID}");
    let original = body_json(get(&app, &uri).await).await;

    let response = patch_json(&app, &uri, json!({ "duration": -5, "poster": "nope" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"].as_array().unwrap().len(), 2);

    assert_eq!(body_json(get(&app, &uri).await).await, original);
}

#[tokio::test]
async fn patch_unknown_id_returns_404() {
    let (app, _) = build_test_app();
    let response = patch_json(&app, "/movies/missing", json!({ "title": "Anything" })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Pelicula no encontrada" })
    );
}

#[tokio::test]
async fn patch_validates_before_lookup() {
    let (app, _) = build_test_app();
    let response = patch_json(&app, "/movies/missing", json!({ "year": "later" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
