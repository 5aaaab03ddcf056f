//! Integration tests for the cache-enabled API client
//!
//! Each test runs a small stub HTTP server on a loopback port and points the
//! client at it, counting connections to observe caching behavior. Responses
//! carry `Connection: close`, so every request opens a fresh connection and
//! the hit counter matches the number of requests that reached the network.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use termfolio::api::{
    ApiClient, ApiError, ManualClock, RequestOptions, ResponseCache, DEFAULT_CACHE_TTL,
};
use termfolio::content::{Section, SectionContent};
use termfolio::provider::SectionProvider;

/// Spawns a stub server answering every request with the given status and body.
///
/// Returns the base URL and a counter of connections served.
async fn spawn_stub(status: &'static str, body: &'static str) -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            counter.fetch_add(1, Ordering::SeqCst);
            tokio::spawn(async move {
                // Drain the request head; the stub never inspects it
                let mut buf = [0u8; 8192];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (format!("http://{}", addr), hits)
}

/// Spawns a server that answers exactly one request, then goes away.
///
/// Connections after the first are refused, which simulates an API that was
/// reachable earlier in the session but is down now.
async fn spawn_one_shot(body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 8192];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
        // The listener drops here, so later connections are refused
    });

    format!("http://{}", addr)
}

/// Spawns a server that accepts connections but never responds
async fn spawn_silent() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((socket, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_secs(60)).await;
                drop(socket);
            });
        }
    });

    format!("http://{}", addr)
}

fn client(base_url: &str) -> ApiClient {
    ApiClient::new(base_url, Duration::from_secs(5))
}

// ============================================================================
// Caching and idempotence
// ============================================================================

#[tokio::test]
async fn repeated_reads_hit_the_network_once() {
    let (base, hits) = spawn_stub("200 OK", r#"[{"id": 1, "title": "One"}]"#).await;
    let client = client(&base);

    let first = client
        .request("/api/projects", RequestOptions::read())
        .await
        .unwrap();
    let second = client
        .request("/api/projects", RequestOptions::read())
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn different_endpoints_are_cached_separately() {
    let (base, hits) = spawn_stub("200 OK", r#"{"ok": true}"#).await;
    let client = client(&base);

    client
        .request("/api/hero", RequestOptions::read())
        .await
        .unwrap();
    client
        .request("/api/about", RequestOptions::read())
        .await
        .unwrap();

    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn skip_cache_forces_a_network_round_trip() {
    let (base, hits) = spawn_stub("200 OK", r#"{"ok": true}"#).await;
    let client = client(&base);

    client
        .request("/api/hero", RequestOptions::read())
        .await
        .unwrap();
    client
        .request("/api/hero", RequestOptions::read_uncached())
        .await
        .unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 2);

    // The bypassing read still refreshed the cache for normal reads
    client
        .request("/api/hero", RequestOptions::read())
        .await
        .unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn invalidation_forces_a_refetch() {
    let (base, hits) = spawn_stub("200 OK", r#"[{"id": 1}]"#).await;
    let client = client(&base);

    client
        .request("/api/projects", RequestOptions::read())
        .await
        .unwrap();
    assert_eq!(client.invalidate("/api/projects"), 1);

    client
        .request("/api/projects", RequestOptions::read())
        .await
        .unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn invalidate_all_empties_every_endpoint() {
    let (base, hits) = spawn_stub("200 OK", r#"{"ok": true}"#).await;
    let client = client(&base);

    client
        .request("/api/hero", RequestOptions::read())
        .await
        .unwrap();
    client
        .request("/api/about", RequestOptions::read())
        .await
        .unwrap();
    client.invalidate_all();

    client
        .request("/api/hero", RequestOptions::read())
        .await
        .unwrap();
    client
        .request("/api/about", RequestOptions::read())
        .await
        .unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 4);
}

// ============================================================================
// Mutations
// ============================================================================

#[tokio::test]
async fn mutations_always_reach_the_network() {
    let (base, hits) = spawn_stub("200 OK", r#"{"id": 9}"#).await;
    let client = client(&base);

    client.create_project(json!({"title": "A"})).await.unwrap();
    client.create_project(json!({"title": "A"})).await.unwrap();

    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn mutation_invalidates_cached_reads_for_its_endpoint() {
    let (base, hits) = spawn_stub("200 OK", r#"[{"id": 1}]"#).await;
    let client = client(&base);

    client.get_projects().await.unwrap();
    client.get_projects().await.unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    client.create_project(json!({"title": "B"})).await.unwrap();

    // The collection read must go back to the network
    client.get_projects().await.unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn update_and_delete_reach_the_network_and_invalidate() {
    let (base, hits) = spawn_stub("200 OK", r#"{"id": 1}"#).await;
    let client = client(&base);

    client.get_projects().await.unwrap();
    client.get_projects().await.unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    let updated = client
        .update_project(1, json!({"title": "B"}))
        .await
        .unwrap();
    assert_eq!(updated, json!({"id": 1}));
    assert_eq!(hits.load(Ordering::SeqCst), 2);

    // The update dropped the cached collection read
    client.get_projects().await.unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 3);

    client.delete_project(1).await.unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 4);

    // And so did the delete
    client.get_projects().await.unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 5);
}

// ============================================================================
// Failure handling
// ============================================================================

#[tokio::test]
async fn stale_entry_serves_when_the_network_fails() {
    let base = spawn_one_shot(r#"[{"id": 1, "title": "Kept"}]"#).await;
    let clock = Arc::new(ManualClock::new());
    let cache = Arc::new(ResponseCache::with_clock(DEFAULT_CACHE_TTL, clock.clone()));
    let client = ApiClient::with_cache(&base, Duration::from_secs(2), cache);

    let first = client
        .request("/api/projects", RequestOptions::read())
        .await
        .unwrap();

    // Entry goes stale and the server is gone
    clock.advance(DEFAULT_CACHE_TTL + Duration::from_secs(1));

    let served = client
        .request("/api/projects", RequestOptions::read())
        .await
        .unwrap();
    assert_eq!(served, first);

    // Stale reads are non-destructive, so the fallback keeps working
    let again = client
        .request("/api/projects", RequestOptions::read())
        .await
        .unwrap();
    assert_eq!(again, first);
}

#[tokio::test]
async fn failure_without_a_cached_entry_propagates() {
    let client = ApiClient::new("http://127.0.0.1:1", Duration::from_millis(500));

    let result = client.request("/api/projects", RequestOptions::read()).await;
    assert!(matches!(
        result,
        Err(ApiError::Network(_)) | Err(ApiError::Timeout(_))
    ));
}

#[tokio::test]
async fn timeout_is_bounded_and_reported() {
    let base = spawn_silent().await;
    let client = ApiClient::new(&base, Duration::from_millis(300));

    let started = Instant::now();
    let result = client.request("/api/hero", RequestOptions::read()).await;
    let elapsed = started.elapsed();

    let err = result.unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got {}", err);
    assert!(
        elapsed >= Duration::from_millis(250),
        "returned before the bound: {:?}",
        elapsed
    );
    assert!(
        elapsed < Duration::from_secs(2),
        "took far longer than the bound: {:?}",
        elapsed
    );
}

#[tokio::test]
async fn server_errors_map_to_status() {
    let (base, _hits) = spawn_stub("500 Internal Server Error", r#"{"detail": "boom"}"#).await;
    let client = client(&base);

    let result = client.request("/api/skills", RequestOptions::read()).await;
    match result {
        Err(ApiError::Status { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn invalid_json_maps_to_decode() {
    let (base, _hits) = spawn_stub("200 OK", "not json at all").await;
    let client = client(&base);

    let result = client.request("/api/hero", RequestOptions::read()).await;
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

// ============================================================================
// Provider behavior
// ============================================================================

#[tokio::test]
async fn provider_fetch_live_uses_the_cache() {
    let (base, hits) = spawn_stub(
        "200 OK",
        r#"{"name": "N", "subtitle": "S", "description": "D"}"#,
    )
    .await;
    let provider = SectionProvider::new(client(&base));

    let first = provider.fetch_live(Section::Hero).await.unwrap();
    let second = provider.fetch_live(Section::Hero).await.unwrap();

    assert_eq!(hits.load(Ordering::SeqCst), 1);
    match (first, second) {
        (SectionContent::Hero(a), SectionContent::Hero(b)) => {
            assert_eq!(a.name, "N");
            assert_eq!(a, b);
        }
        other => panic!("expected hero content, got {:?}", other),
    }
}

#[tokio::test]
async fn provider_refresh_always_networks() {
    let (base, hits) = spawn_stub(
        "200 OK",
        r#"{"name": "N", "subtitle": "S", "description": "D"}"#,
    )
    .await;
    let provider = SectionProvider::new(client(&base));

    provider.fetch_live(Section::Hero).await.unwrap();
    provider.refresh(Section::Hero).await.unwrap();
    provider.refresh(Section::Hero).await.unwrap();

    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

// ============================================================================
// Health check
// ============================================================================

#[tokio::test]
async fn health_check_reports_healthy_status() {
    let (base, _hits) = spawn_stub("200 OK", r#"{"status": "healthy"}"#).await;
    assert!(client(&base).health_check().await.unwrap());
}

#[tokio::test]
async fn health_check_reports_other_statuses_as_unhealthy() {
    let (base, _hits) = spawn_stub("200 OK", r#"{"status": "degraded"}"#).await;
    assert!(!client(&base).health_check().await.unwrap());
}
