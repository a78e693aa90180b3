#![allow(dead_code)]

//! Test infrastructure for ft-server API tests

use ft_auth::{AccessGuard, ClientRateLimiter, RateLimitConfig};
use ft_server::{AppState, Metrics};
use ft_store::RecordStore;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::Request;
use tempfile::TempDir;

pub const TEST_SECRET: &str = "test-secret";

/// Create AppState for testing, backed by a snapshot file in a fresh temp
/// directory. The TempDir must stay alive for the duration of the test.
pub fn create_test_app_state() -> (AppState, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let state = create_test_app_state_at(
        &dir,
        RateLimitConfig {
            max_requests: 10000,
            window_secs: 60,
        },
    );
    (state, dir)
}

/// Create AppState over an existing temp directory, so a test can simulate
/// a restart by building a second state on the same snapshot file.
pub fn create_test_app_state_at(dir: &TempDir, rate_limit: RateLimitConfig) -> AppState {
    AppState {
        store: RecordStore::open(dir.path().join("db.json")),
        guard: AccessGuard::new(TEST_SECRET),
        limiter: ClientRateLimiter::new(rate_limit),
        metrics: Metrics::new(),
    }
}

/// GET request with no credential
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// GET request with the shared secret attached
pub fn authed_get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("x-api-key", TEST_SECRET)
        .body(Body::empty())
        .unwrap()
}

/// POST update with a JSON body and an optional credential
pub fn update_request(uri: &str, api_key: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(key) = api_key {
        builder = builder.header("x-api-key", key);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Attach a peer address, as `into_make_service_with_connect_info` would
pub fn with_peer_addr(mut request: Request<Body>, addr: SocketAddr) -> Request<Body> {
    request.extensions_mut().insert(ConnectInfo(addr));
    request
}

pub fn peer(last_octet: u8) -> SocketAddr {
    SocketAddr::new(
        IpAddr::V4(Ipv4Addr::new(127, 0, 0, last_octet)),
        40000 + last_octet as u16,
    )
}
