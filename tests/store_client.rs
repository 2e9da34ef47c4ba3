mod common;

use common::make_client;
use common::mock_store::{MockResponse, MockStore};
use larder::store::{NewIngredient, StoreError};

#[tokio::test]
async fn create_posts_the_draft_and_merges_the_assigned_id() {
    let store = MockStore::start().await;
    store
        .enqueue_response(MockResponse::json(r#"{"name": "-NxAbc123"}"#))
        .await;
    let client = make_client(&store.base_url());

    let created = client
        .create_ingredient(NewIngredient {
            title: "Flour".to_string(),
            amount: 2.5,
        })
        .await
        .expect("create should succeed");

    assert_eq!(created.id, "-NxAbc123");
    assert_eq!(created.title, "Flour");
    assert_eq!(created.amount, 2.5);

    let requests = store.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/ingredients.json");
    assert!(requests[0].query.is_none());

    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body, serde_json::json!({"title": "Flour", "amount": 2.5}));
}

#[tokio::test]
async fn create_with_error_status_reports_the_status() {
    let store = MockStore::start().await;
    store.enqueue_response(MockResponse::error(500)).await;
    let client = make_client(&store.base_url());

    let err = client
        .create_ingredient(NewIngredient {
            title: "Flour".to_string(),
            amount: 1.0,
        })
        .await
        .expect_err("500 must fail");

    assert!(matches!(err, StoreError::Status { status: 500 }));
    assert_eq!(err.user_message(), "Something went wrong");
}

#[tokio::test]
async fn create_with_missing_id_in_body_is_malformed() {
    let store = MockStore::start().await;
    store
        .enqueue_response(MockResponse::json(r#"{"unexpected": true}"#))
        .await;
    let client = make_client(&store.base_url());

    let err = client
        .create_ingredient(NewIngredient {
            title: "Flour".to_string(),
            amount: 1.0,
        })
        .await
        .expect_err("body without name must fail");

    assert!(matches!(err, StoreError::MalformedResponse { .. }));
}

#[tokio::test]
async fn delete_targets_the_record_path() {
    let store = MockStore::start().await;
    store.enqueue_response(MockResponse::json("null")).await;
    let client = make_client(&store.base_url());

    client
        .delete_ingredient("-NxAbc123")
        .await
        .expect("delete should succeed");

    let requests = store.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/ingredients/-NxAbc123.json");
}

#[tokio::test]
async fn delete_with_error_status_fails() {
    let store = MockStore::start().await;
    store.enqueue_response(MockResponse::error(404)).await;
    let client = make_client(&store.base_url());

    let err = client
        .delete_ingredient("nope")
        .await
        .expect_err("404 must fail");
    assert!(matches!(err, StoreError::Status { status: 404 }));
}

#[tokio::test]
async fn unfiltered_fetch_sends_no_query() {
    let store = MockStore::start().await;
    let client = make_client(&store.base_url());

    let ingredients = client
        .fetch_ingredients(None)
        .await
        .expect("fetch should succeed");

    // Default mock response is `null`: an empty store.
    assert!(ingredients.is_empty());

    let requests = store.captured_requests().await;
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/ingredients.json");
    assert!(requests[0].query.is_none());
}

#[tokio::test]
async fn filtered_fetch_quotes_both_query_values() {
    let store = MockStore::start().await;
    let client = make_client(&store.base_url());

    client
        .fetch_ingredients(Some("Flour"))
        .await
        .expect("fetch should succeed");

    let requests = store.captured_requests().await;
    let query = requests[0].query.as_deref().expect("query must be present");
    // The store's filter syntax wants literal quotes around both values.
    assert!(query.contains("orderBy=%22title%22"), "query was: {query}");
    assert!(query.contains("equalTo=%22Flour%22"), "query was: {query}");
}

#[tokio::test]
async fn fetch_returns_records_in_key_order_with_ids_merged() {
    let store = MockStore::start().await;
    // Push ids sort chronologically; serve them shuffled to prove the
    // client orders by key.
    store
        .enqueue_response(MockResponse::json(
            r#"{
                "-Nc": {"title": "Salt", "amount": 0.5},
                "-Na": {"title": "Flour", "amount": 2},
                "-Nb": {"title": "Sugar", "amount": 1}
            }"#,
        ))
        .await;
    let client = make_client(&store.base_url());

    let ingredients = client
        .fetch_ingredients(None)
        .await
        .expect("fetch should succeed");

    let ids: Vec<&str> = ingredients.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["-Na", "-Nb", "-Nc"]);
    assert_eq!(ingredients[0].title, "Flour");
    assert_eq!(ingredients[0].amount, 2.0);
}

#[tokio::test]
async fn fetch_with_error_status_fails_before_parsing() {
    let store = MockStore::start().await;
    store.enqueue_response(MockResponse::error(503)).await;
    let client = make_client(&store.base_url());

    let err = client
        .fetch_ingredients(None)
        .await
        .expect_err("503 must fail");
    assert!(matches!(err, StoreError::Status { status: 503 }));
}

#[tokio::test]
async fn fetch_with_non_object_body_is_malformed() {
    let store = MockStore::start().await;
    store
        .enqueue_response(MockResponse::json(r#"["not", "an", "object"]"#))
        .await;
    let client = make_client(&store.base_url());

    let err = client
        .fetch_ingredients(None)
        .await
        .expect_err("array body must fail");
    assert!(matches!(err, StoreError::MalformedResponse { .. }));
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let store = MockStore::start().await;
    let client = make_client(&format!("{}/", store.base_url()));

    client
        .fetch_ingredients(None)
        .await
        .expect("fetch should succeed");

    let requests = store.captured_requests().await;
    assert_eq!(requests[0].path, "/ingredients.json");
}
