//! Property-style tests for the in-memory registry.

use chrono::{Duration, Utc};
use linksnip::domain::entities::{GeoLocation, NewClick, NewUrlRecord};
use linksnip::domain::repositories::UrlRegistry;
use linksnip::infrastructure::memory::InMemoryRegistry;
use std::sync::Arc;

fn new_record(code: &str, validity_minutes: i64) -> NewUrlRecord {
    NewUrlRecord {
        code: code.to_string(),
        original_url: "https://example.com/page".to_string(),
        validity_minutes,
    }
}

fn new_click(ip: &str) -> NewClick {
    NewClick {
        ip: ip.to_string(),
        user_agent: "Unknown".to_string(),
        referrer: "direct".to_string(),
        location: GeoLocation::unknown(),
    }
}

#[tokio::test]
async fn test_create_then_find_round_trip() {
    let registry = InMemoryRegistry::new();

    let created = registry.create(new_record("abc123", 45)).await.unwrap();
    let found = registry.find_active("abc123").await.unwrap().unwrap();

    assert_eq!(found.original_url, "https://example.com/page");
    assert_eq!(found.expires_at, found.created_at + Duration::minutes(45));
    assert_eq!(found.created_at, created.created_at);
}

#[tokio::test]
async fn test_exists_flips_on_create() {
    let registry = InMemoryRegistry::new();

    assert!(!registry.exists("fresh1").await.unwrap());
    registry.create(new_record("fresh1", 30)).await.unwrap();
    assert!(registry.exists("fresh1").await.unwrap());
}

#[tokio::test]
async fn test_expired_record_resolves_as_not_found_before_any_sweep() {
    let registry = InMemoryRegistry::new();

    registry.create(new_record("stale1", -1)).await.unwrap();

    // Physically present, logically gone.
    assert!(registry.find_active("stale1").await.unwrap().is_none());
    assert!(registry.exists("stale1").await.unwrap());
}

#[tokio::test]
async fn test_cleanup_removes_exactly_the_expired_and_is_idempotent() {
    let registry = InMemoryRegistry::new();

    registry.create(new_record("live1", 30)).await.unwrap();
    registry.create(new_record("live2", 60)).await.unwrap();
    registry.create(new_record("dead1", -1)).await.unwrap();
    registry.create(new_record("dead2", -120)).await.unwrap();

    let now = Utc::now();
    assert_eq!(registry.cleanup_expired(now).await.unwrap(), 2);
    assert_eq!(registry.cleanup_expired(now).await.unwrap(), 0);

    assert!(registry.exists("live1").await.unwrap());
    assert!(registry.exists("live2").await.unwrap());
    assert!(!registry.exists("dead1").await.unwrap());
    assert!(!registry.exists("dead2").await.unwrap());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_hundred_concurrent_clicks_lose_nothing() {
    let registry = Arc::new(InMemoryRegistry::new());
    registry.create(new_record("burst1", 30)).await.unwrap();

    let mut handles = Vec::with_capacity(100);
    for i in 0..100 {
        let registry = registry.clone();
        handles.push(tokio::spawn(async move {
            registry
                .record_click("burst1", new_click(&format!("203.0.113.{}", i % 256)))
                .await
                .unwrap()
        }));
    }

    for handle in handles {
        assert!(handle.await.unwrap());
    }

    let analytics = registry.get_analytics("burst1").await.unwrap().unwrap();
    assert_eq!(analytics.total_clicks, 100);
    assert_eq!(analytics.clicks.len(), 100);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_claim_a_code_exactly_once() {
    let registry = Arc::new(InMemoryRegistry::new());

    let mut handles = Vec::with_capacity(20);
    for _ in 0..20 {
        let registry = registry.clone();
        handles.push(tokio::spawn(async move {
            registry.create(new_record("race01", 30)).await.is_ok()
        }));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap() {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(registry.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_cleanup_racing_clicks_never_corrupts() {
    let registry = Arc::new(InMemoryRegistry::new());
    registry.create(new_record("flappy", -1)).await.unwrap();

    let clicker = {
        let registry = registry.clone();
        tokio::spawn(async move {
            for i in 0..50 {
                // Either outcome of the race is fine; corruption is not.
                let _ = registry
                    .record_click("flappy", new_click(&format!("203.0.113.{}", i)))
                    .await
                    .unwrap();
            }
        })
    };

    let sweeper = {
        let registry = registry.clone();
        tokio::spawn(async move { registry.cleanup_expired(Utc::now()).await.unwrap() })
    };

    clicker.await.unwrap();
    sweeper.await.unwrap();

    // If the entry survived any click after removal it was re-created,
    // which must never happen; otherwise every stored click is intact.
    if let Some(analytics) = registry.get_analytics("flappy").await.unwrap() {
        assert_eq!(analytics.total_clicks, analytics.clicks.len() as u64);
    }
}
