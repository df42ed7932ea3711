use std::net::SocketAddr;

use axum::Router;
use migration::{Migrator, MigratorTrait};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::auth::{AdminCredentials, ServerState};
use server::routes;

const ADMIN_USER: &str = "admin";
const ADMIN_PASS: &str = "test-admin-pass";

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    // Make sure a developer config.toml does not leak into the tests
    std::env::set_var("CONFIG_PATH", "/nonexistent-config-for-tests.toml");

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL missing; skip e2e tests.");
        return Err(anyhow::anyhow!("missing DATABASE_URL"));
    }

    let db = models::db::connect().await?;
    Migrator::up(&db, None).await?;

    let state = ServerState {
        db,
        admin: AdminCredentials { username: ADMIN_USER.into(), password: ADMIN_PASS.into() },
    };

    let app: Router = routes::build_router(state, CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_admin_routes_require_credentials() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let c = client();

    // No Authorization header at all: rejected by the extractor
    let res = c.get(format!("{}/api/bookings", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    // Wrong password
    let res = c
        .get(format!("{}/api/bookings", app.base_url))
        .basic_auth(ADMIN_USER, Some("wrong"))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);

    // Correct credentials
    let res = c
        .get(format!("{}/api/bookings", app.base_url))
        .basic_auth(ADMIN_USER, Some(ADMIN_PASS))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn e2e_login_checks_credentials() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let c = client();

    let res = c
        .post(format!("{}/api/auth/login", app.base_url))
        .json(&json!({"username": ADMIN_USER, "password": ADMIN_PASS}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["role"], "admin");

    let res = c
        .post(format!("{}/api/auth/login", app.base_url))
        .json(&json!({"username": ADMIN_USER, "password": "nope"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn e2e_booking_flow() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let c = client();

    // Invalid email is rejected before it reaches the database
    let res = c
        .post(format!("{}/api/bookings", app.base_url))
        .json(&json!({
            "client_name": "Ana P.",
            "email": "not-an-email",
            "phone": "+1 555 0100",
            "event_type": "wedding",
            "event_date": "2026-10-17",
            "event_time": "14:00",
            "location": "Lakeside pavilion",
            "duration": "8 hours"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    // Valid submission lands in pending
    let res = c
        .post(format!("{}/api/bookings", app.base_url))
        .json(&json!({
            "client_name": "Ana P.",
            "email": "ana@example.com",
            "phone": "+1 555 0100",
            "event_type": "wedding",
            "event_date": "2026-10-17",
            "event_time": "14:00",
            "location": "Lakeside pavilion",
            "duration": "8 hours"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["status"], "pending");
    let id = body["data"]["id"].as_str().unwrap().to_string();

    // Admin confirms it
    let res = c
        .put(format!("{}/api/bookings/{}", app.base_url, id))
        .basic_auth(ADMIN_USER, Some(ADMIN_PASS))
        .json(&json!({"status": "confirmed"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["status"], "confirmed");

    // Clean up
    let res = c
        .delete(format!("{}/api/bookings/{}", app.base_url, id))
        .basic_auth(ADMIN_USER, Some(ADMIN_PASS))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn e2e_faq_readable_by_id() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let c = client();

    let res = c
        .post(format!("{}/api/faqs", app.base_url))
        .basic_auth(ADMIN_USER, Some(ADMIN_PASS))
        .json(&json!({
            "question": "Do you deliver RAW files?",
            "answer": "No, only edited exports.",
            "category": "deliverables"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let body = res.json::<serde_json::Value>().await?;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    // Readable without credentials
    let res = c.get(format!("{}/api/faqs/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["question"], "Do you deliver RAW files?");

    let res = c
        .delete(format!("{}/api/faqs/{}", app.base_url, id))
        .basic_auth(ADMIN_USER, Some(ADMIN_PASS))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn e2e_settings_reject_unknown_key() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let app = match start_server().await {
        Ok(a) => a,
        Err(_) => return Ok(()),
    };
    let c = client();

    let res = c
        .put(format!("{}/api/settings/favorite_lens", app.base_url))
        .basic_auth(ADMIN_USER, Some(ADMIN_PASS))
        .json(&json!({"value": "50mm"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}
