//! End-to-end API flows against an in-memory store

use axum::body::Body;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};

use element_server::{Config, DocumentStore, ServerState};
use shared::Catalog;

const ADMIN_EMAIL: &str = "admin@element.com";

fn test_state() -> ServerState {
    let mut config = Config::from_env().unwrap();
    config.admin_emails = vec![ADMIN_EMAIL.to_string()];
    ServerState::new(
        config,
        DocumentStore::open_in_memory().unwrap(),
        Catalog::standard(),
    )
}

async fn call(
    state: &ServerState,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(v) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };

    let response = state.http.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn register(state: &ServerState, email: &str) -> String {
    let (status, body) = call(
        state,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({"email": email, "password": "secret1", "name": "Анна"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["token"].as_str().unwrap().to_string()
}

fn order_request(consent: bool) -> Value {
    json!({
        "name": "Анна",
        "phone": "+7 900 000-00-00",
        "comment": "К юбилею",
        "consent": consent,
        "selection": {
            "materialId": "oak",
            "finishId": "v_red",
            "configuration": {"lodgement": true, "leatherAnimal": "Питон"}
        }
    })
}

#[tokio::test]
async fn test_register_login_submit_and_list_orders() {
    let state = test_state();
    register(&state, "Anna@Example.com").await;

    let (status, login) = call(
        &state,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"email": "anna@example.com", "password": "secret1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(login["user"]["email"], "anna@example.com");
    assert_eq!(login["user"]["isAdmin"], false);
    let token = login["token"].as_str().unwrap();

    let (status, me) = call(&state, "GET", "/api/auth/me", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["name"], "Анна");

    let (status, order) = call(&state, "POST", "/api/orders", Some(token), Some(order_request(true))).await;
    assert_eq!(status, StatusCode::OK, "{order}");
    assert_eq!(order["status"], "pending");
    assert_eq!(order["items"], "Индивидуальный заказ");

    // Payload is re-derived on the server: stale leather note is dropped
    let details = &order["details"];
    assert_eq!(details["wood"], "Благородный Дуб");
    assert_eq!(details["interior"], "Бархат");
    assert_eq!(details["finish"], "Красный Бархат");
    assert_eq!(details["lodgement"], true);
    assert!(details.get("leatherAnimal").is_none());
    assert!(details.get("varnish").is_none());
    assert_eq!(details["contactMethod"], "request");
    assert_eq!(details["comment"], "К юбилею");

    let (status, mine) = call(&state, "GET", "/api/orders/mine", Some(token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(mine.as_array().unwrap().len(), 1);
    assert_eq!(mine[0]["id"], order["id"]);
}

#[tokio::test]
async fn test_wrong_password_and_unknown_email_look_the_same() {
    let state = test_state();
    register(&state, "anna@example.com").await;

    let (s1, b1) = call(
        &state,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"email": "anna@example.com", "password": "wrong-pass"})),
    )
    .await;
    let (s2, b2) = call(
        &state,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"email": "ghost@example.com", "password": "secret1"})),
    )
    .await;

    assert_eq!(s1, StatusCode::UNAUTHORIZED);
    assert_eq!(s1, s2);
    assert_eq!(b1, b2);
    assert_eq!(b1["code"], 1002);
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let state = test_state();
    register(&state, "anna@example.com").await;

    let (status, body) = call(
        &state,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({"email": " ANNA@example.com ", "password": "secret1", "name": "Другая"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 5002);
}

#[tokio::test]
async fn test_short_password_rejected() {
    let state = test_state();
    let (status, body) = call(
        &state,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({"email": "anna@example.com", "password": "12345", "name": "Анна"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1005);
}

#[tokio::test]
async fn test_order_requires_auth_and_consent() {
    let state = test_state();

    let (status, _) = call(&state, "POST", "/api/orders", None, Some(order_request(true))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = register(&state, "anna@example.com").await;
    let (status, body) = call(&state, "POST", "/api/orders", Some(&token), Some(order_request(false))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 3003);

    let mut missing_phone = order_request(true);
    missing_phone["phone"] = json!("  ");
    let (_, body) = call(&state, "POST", "/api/orders", Some(&token), Some(missing_phone)).await;
    assert_eq!(body["code"], 3004);

    let mut unknown = order_request(true);
    unknown["selection"]["materialId"] = json!("mahogany");
    let (status, body) = call(&state, "POST", "/api/orders", Some(&token), Some(unknown)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4001);
}

#[tokio::test]
async fn test_custom_wood_required_for_custom_material() {
    let state = test_state();
    let token = register(&state, "anna@example.com").await;

    let mut req = order_request(true);
    req["selection"]["materialId"] = json!("custom");
    let (status, body) = call(&state, "POST", "/api/orders", Some(&token), Some(req.clone())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4004);

    req["selection"]["configuration"]["customWood"] = json!("Орех");
    let (status, order) = call(&state, "POST", "/api/orders", Some(&token), Some(req)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["details"]["wood"], "Орех");
}

#[tokio::test]
async fn test_admin_routes() {
    let state = test_state();
    let customer = register(&state, "anna@example.com").await;
    let admin = register(&state, ADMIN_EMAIL).await;

    let (status, body) = call(&state, "GET", "/api/admin/stats", Some(&customer), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 2002);

    let (status, _) = call(&state, "GET", "/api/admin/users", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, order) = call(&state, "POST", "/api/orders", Some(&customer), Some(order_request(true))).await;
    let order_id = order["id"].as_str().unwrap();

    let (status, updated) = call(
        &state,
        "PUT",
        &format!("/api/admin/orders/{order_id}/status"),
        Some(&admin),
        Some(json!({"status": "completed"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "completed");

    let (status, body) = call(
        &state,
        "PUT",
        "/api/admin/orders/missing/status",
        Some(&admin),
        Some(json!({"status": "cancelled"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3001);

    let (status, users) = call(&state, "GET", "/api/admin/users", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users.iter().any(|u| u["email"] == ADMIN_EMAIL && u["isAdmin"] == true));
    assert!(users.iter().all(|u| u.get("passwordHash").is_none()));

    let (_, orders) = call(&state, "GET", "/api/admin/orders", Some(&admin), None).await;
    assert_eq!(orders.as_array().unwrap().len(), 1);

    let (status, stats) = call(&state, "GET", "/api/admin/stats", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["totalOrders"], 1);
    assert_eq!(stats["completedOrders"], 1);
    assert_eq!(stats["totalUsers"], 2);
    assert_eq!(stats["usersWithoutOrders"], 1);
    assert_eq!(stats["conversionPercent"], 50);
}

#[tokio::test]
async fn test_catalog_and_resolve_are_public() {
    let state = test_state();

    let (status, catalog) = call(&state, "GET", "/api/catalog", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(catalog["materials"].as_array().unwrap().len(), 5);
    assert_eq!(catalog["finishes"].as_array().unwrap().len(), 11);
    assert_eq!(catalog["categories"][0]["id"], "velvet");

    let (status, resolved) = call(
        &state,
        "POST",
        "/api/configurator/resolve",
        None,
        Some(json!({
            "selection": {"materialId": "oak", "finishId": "v_red"},
            "category": "leather",
            "updates": [
                {"field": "leatherAnimal", "value": "Питон"},
                {"field": "lodgement", "value": true}
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{resolved}");
    assert_eq!(resolved["selection"]["finishId"], "l_black");
    assert!(
        resolved["visibleFinishes"]
            .as_array()
            .unwrap()
            .iter()
            .all(|f| f["type"] == "leather")
    );
    assert_eq!(resolved["payload"]["leatherAnimal"], "Питон");
    assert_eq!(resolved["payload"]["lodgement"], true);
    assert_eq!(resolved["payload"]["interior"], "Натур. Кожа");

    let (status, body) = call(
        &state,
        "POST",
        "/api/configurator/resolve",
        None,
        Some(json!({"selection": {"materialId": "oak", "finishId": "silk"}})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4002);
}

#[tokio::test]
async fn test_visitor_log() {
    let state = test_state();
    let admin = register(&state, ADMIN_EMAIL).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/visitors")
        .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
        .header("user-agent", "integration-test")
        .body(Body::empty())
        .unwrap();
    let response = state.http.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let (status, _) = call(&state, "GET", "/api/admin/visitors", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, visits) = call(&state, "GET", "/api/admin/visitors", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(visits[0]["ip"], "203.0.113.7");
    assert_eq!(visits[0]["userAgent"], "integration-test");
}

#[tokio::test]
async fn test_health() {
    let state = test_state();
    let (status, body) = call(&state, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
