use chrono::{Duration as ChronoDuration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::StatusCode;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use stockdesk_api::app::services::AppServices;
use stockdesk_auth::JwtClaims;
use stockdesk_core::OwnerId;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(jwt_secret: &str) -> Self {
        // Same router as prod over the in-memory store, on an ephemeral port.
        let app = stockdesk_api::app::router(jwt_secret, AppServices::in_memory());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn mint_jwt(jwt_secret: &str, owner_id: OwnerId) -> String {
    let now = Utc::now();
    let claims = JwtClaims {
        sub: owner_id,
        email: Some("owner@example.com".to_string()),
        issued_at: now - ChronoDuration::seconds(5),
        expires_at: now + ChronoDuration::minutes(10),
    };

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .expect("failed to encode jwt")
}

async fn post_json(client: &reqwest::Client, url: String, token: &str, body: Value) -> (StatusCode, Value) {
    let res = client.post(url).bearer_auth(token).json(&body).send().await.unwrap();
    let status = res.status();
    (status, res.json().await.unwrap_or(Value::Null))
}

async fn get_json(client: &reqwest::Client, url: String, token: &str) -> (StatusCode, Value) {
    let res = client.get(url).bearer_auth(token).send().await.unwrap();
    let status = res.status();
    (status, res.json().await.unwrap_or(Value::Null))
}

#[tokio::test]
async fn auth_required_for_protected_endpoints() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    for path in ["/whoami", "/inventory/items", "/vendors", "/reports", "/profile"] {
        let res = client.get(srv.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{path}");
    }

    // Signed with the wrong secret.
    let forged = mint_jwt("other-secret", OwnerId::new());
    let res = client.get(srv.url("/whoami")).bearer_auth(forged).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "unauthorized");
}

#[tokio::test]
async fn owner_context_is_derived_from_token() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let owner = OwnerId::new();
    let token = mint_jwt(jwt_secret, owner);

    let client = reqwest::Client::new();
    let (status, body) = get_json(&client, srv.url("/whoami"), &token).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["owner_id"].as_str().unwrap(), owner.to_string());
    assert_eq!(body["email"], "owner@example.com");
}

#[tokio::test]
async fn inventory_lifecycle_create_patch_delete() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let token = mint_jwt(jwt_secret, OwnerId::new());
    let client = reqwest::Client::new();

    // Create
    let (status, created) = post_json(
        &client,
        srv.url("/inventory/items"),
        &token,
        json!({ "name": "Widget", "stock_count": 4, "unit": "box" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    let code = created["code"].as_str().unwrap().to_string();
    assert!(code.starts_with("WID"));
    assert_eq!(code.len(), 6);
    assert_eq!(created["reorder_level"], 10);
    assert_eq!(created["status"], "low");

    // Patch
    let res = client
        .patch(srv.url(&format!("/inventory/items/{id}")))
        .bearer_auth(&token)
        .json(&json!({ "stock_count": 40 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let patched: Value = res.json().await.unwrap();
    assert_eq!(patched["stock_count"], 40);
    assert_eq!(patched["code"], code.as_str());
    assert_eq!(patched["status"], "in_stock");

    // Query
    let (status, item) = get_json(&client, srv.url(&format!("/inventory/items/{id}")), &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(item["name"], "Widget");
    assert_eq!(item["unit"], "box");

    // Delete
    let res = client
        .delete(srv.url(&format!("/inventory/items/{id}")))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let (status, body) = get_json(&client, srv.url(&format!("/inventory/items/{id}")), &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn invalid_input_is_a_json_400() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let token = mint_jwt(jwt_secret, OwnerId::new());
    let client = reqwest::Client::new();

    let (status, body) = post_json(
        &client,
        srv.url("/inventory/items"),
        &token,
        json!({ "name": "   ", "stock_count": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    let (status, body) = post_json(
        &client,
        srv.url("/vendors"),
        &token,
        json!({ "name": "Loom Ltd", "category": "Textiles", "rating": 9 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    let (status, body) = get_json(&client, srv.url("/vendors/not-an-id"), &token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_id");
}

#[tokio::test]
async fn owner_isolation_blocks_cross_owner_reads_and_writes() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let token1 = mint_jwt(jwt_secret, OwnerId::new());
    let token2 = mint_jwt(jwt_secret, OwnerId::new());
    let client = reqwest::Client::new();

    let (status, created) = post_json(
        &client,
        srv.url("/inventory/items"),
        &token1,
        json!({ "name": "Widget", "stock_count": 4 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();

    let (status, _) = get_json(&client, srv.url(&format!("/inventory/items/{id}")), &token2).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let res = client
        .patch(srv.url(&format!("/inventory/items/{id}")))
        .bearer_auth(&token2)
        .json(&json!({ "stock_count": 0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .delete(srv.url(&format!("/inventory/items/{id}")))
        .bearer_auth(&token2)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let (_, listing) = get_json(&client, srv.url("/inventory/items"), &token2).await;
    assert!(listing["items"].as_array().unwrap().is_empty());

    let (_, listing) = get_json(&client, srv.url("/inventory/items"), &token1).await;
    assert_eq!(listing["items"].as_array().unwrap().len(), 1);
    assert_eq!(listing["items"][0]["stock_count"], 4);
}

#[tokio::test]
async fn vendor_verification_is_explicit() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let token = mint_jwt(jwt_secret, OwnerId::new());
    let client = reqwest::Client::new();

    let (status, vendor) = post_json(
        &client,
        srv.url("/vendors"),
        &token,
        json!({ "name": "Loom Ltd", "category": "Raw Materials", "rating": 4, "price_tier": "high" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(vendor["verified"], false);
    assert_eq!(vendor["price_tier_label"], "$$$ (High)");
    let id = vendor["id"].as_str().unwrap().to_string();

    // A patch cannot flip the flag.
    let res = client
        .patch(srv.url(&format!("/vendors/{id}")))
        .bearer_auth(&token)
        .json(&json!({ "name": "Loom Limited", "verified": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let patched: Value = res.json().await.unwrap();
    assert_eq!(patched["name"], "Loom Limited");
    assert_eq!(patched["verified"], false);

    let res = client
        .put(srv.url(&format!("/vendors/{id}/verification")))
        .bearer_auth(&token)
        .json(&json!({ "verified": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let verified: Value = res.json().await.unwrap();
    assert_eq!(verified["verified"], true);

    let (_, fetched) = get_json(&client, srv.url(&format!("/vendors/{id}")), &token).await;
    assert_eq!(fetched["verified"], true);
}

#[tokio::test]
async fn suggested_vendor_and_search() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let token = mint_jwt(jwt_secret, OwnerId::new());
    let client = reqwest::Client::new();

    let (status, _) = get_json(&client, srv.url("/vendors/suggested"), &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    for (name, category, rating) in [
        ("Acme Threads", "Textiles", 3),
        ("Best Boxes", "Packaging", 5),
        ("Crate Co", "Packaging", 5),
    ] {
        let (status, _) = post_json(
            &client,
            srv.url("/vendors"),
            &token,
            json!({ "name": name, "category": category, "rating": rating }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, best) = get_json(&client, srv.url("/vendors/suggested"), &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(best["rating"], 5);

    let (_, listing) = get_json(&client, srv.url("/vendors?search=packag"), &token).await;
    assert_eq!(listing["items"].as_array().unwrap().len(), 2);
    assert_eq!(listing["suggested"]["rating"], 5);
}

#[tokio::test]
async fn profile_is_created_on_first_save_then_updated() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let token = mint_jwt(jwt_secret, OwnerId::new());
    let client = reqwest::Client::new();

    let (status, _) = get_json(&client, srv.url("/profile"), &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let save = |body: Value| {
        client
            .put(srv.url("/profile"))
            .bearer_auth(&token)
            .json(&body)
            .send()
    };

    let first: Value = save(json!({ "company_name": "Acme", "industry": "FMCG" }))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: Value = save(json!({ "company_name": "Acme Foods", "industry": "Food Processing", "phone": " " }))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(first["id"], second["id"]);
    assert_eq!(second["company_name"], "Acme Foods");
    assert_eq!(second["industry"], "Food Processing");
    assert_eq!(second["phone"], Value::Null);

    let (status, fetched) = get_json(&client, srv.url("/profile"), &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["company_name"], "Acme Foods");
}

#[tokio::test]
async fn report_numbers_follow_the_snapshot() {
    let jwt_secret = "test-secret";
    let srv = TestServer::spawn(jwt_secret).await;
    let token = mint_jwt(jwt_secret, OwnerId::new());
    let client = reqwest::Client::new();

    for body in [
        json!({ "name": "Thread", "stock_count": 0, "reorder_level": 10, "price_per_unit": "1.00" }),
        json!({ "name": "Needles", "stock_count": 100, "reorder_level": 10, "price_per_unit": "0.50" }),
        json!({ "name": "Zips", "stock_count": 2, "reorder_level": 30 }),
    ] {
        let (status, _) = post_json(&client, srv.url("/inventory/items"), &token, body).await;
        assert_eq!(status, StatusCode::CREATED);
    }
    for (name, rating) in [("Weave Co", 4), ("Loom Ltd", 5)] {
        let (status, _) = post_json(
            &client,
            srv.url("/vendors"),
            &token,
            json!({ "name": name, "category": "Textiles", "rating": rating }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, report) = get_json(&client, srv.url("/reports"), &token).await;
    assert_eq!(status, StatusCode::OK);

    let summary = &report["summary"];
    assert_eq!(summary["total_items"], 3);
    assert_eq!(summary["total_vendors"], 2);
    assert_eq!(summary["low_stock_count"], 2);
    assert_eq!(summary["average_rating"], 4.5);
    let value: Decimal = summary["inventory_value"].as_str().unwrap().parse().unwrap();
    assert_eq!(value, Decimal::new(50, 0));

    let mut recommendations: Vec<(String, u64, String)> = report["reorder_recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| {
            (
                r["item_name"].as_str().unwrap().to_string(),
                r["recommended_order"].as_u64().unwrap(),
                r["priority"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    recommendations.sort();
    assert_eq!(
        recommendations,
        vec![
            ("Thread".to_string(), 50, "Critical".to_string()),
            ("Zips".to_string(), 90, "High".to_string()),
        ]
    );

    assert_eq!(report["vendor_categories"][0]["category"], "Textiles");
    assert_eq!(report["vendor_categories"][0]["count"], 2);
    assert_eq!(report["top_vendors"][0]["name"], "Loom Ltd");

    let (_, low) = get_json(&client, srv.url("/inventory/low-stock"), &token).await;
    assert_eq!(low["items"].as_array().unwrap().len(), 2);
}
