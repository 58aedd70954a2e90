//! Integration tests for the staging cache
//!
//! Exercises the public crate surface the way the orchestration layer uses
//! it: preset caches written after record creation, point reads by id, and
//! snapshot listings.

use std::thread::sleep;
use std::time::Duration;

use staging_cache::cache::key;
use staging_cache::models::{Run, RunStatus, Scenario, ScenarioStatus};
use staging_cache::{
    run_cache, scenario_cache, BoundedTtlCache, CacheConfig, SharedCache,
};

#[test]
fn test_scenario_staging_lifecycle() {
    let mut cache = scenario_cache();

    cache.set(Scenario::new("scn-1", "smoke"));
    cache.set(Scenario::new("scn-2", "nightly"));

    // Point read after creation
    let scenario = cache.get("scn-1").expect("freshly staged scenario");
    assert_eq!(scenario.name, "smoke");
    assert_eq!(scenario.status, ScenarioStatus::Draft);

    // Orchestrator mutates and re-stages; the same key is overwritten
    cache.set(scenario.with_status(ScenarioStatus::Active));
    let scenario = cache.get("scn-1").expect("updated scenario");
    assert_eq!(scenario.status, ScenarioStatus::Active);
    assert_eq!(cache.len(), 2);

    // Snapshot keeps first-insertion order even after the overwrite
    let ids: Vec<String> = cache.values().into_iter().map(|s| s.id).collect();
    assert_eq!(ids, vec!["scn-1", "scn-2"]);
}

#[test]
fn test_run_staging_keyed_by_run_id() {
    let mut cache = run_cache();

    let run = Run::new("run-1", "scn-1");
    cache.set(run.clone());

    assert_eq!(cache.get("run-1"), Some(run.clone()));

    cache.set(run.finish(RunStatus::Succeeded));
    let finished = cache.get("run-1").expect("finished run");
    assert_eq!(finished.status, RunStatus::Succeeded);
    assert!(finished.finished_at.is_some());
}

#[test]
fn test_run_cache_evicts_oldest_at_capacity() {
    let mut cache = run_cache();

    for i in 0..301 {
        cache.set(Run::new(format!("run-{i}"), "scn-1"));
    }

    assert_eq!(cache.len(), 300);
    assert!(cache.get("run-0").is_none());
    assert!(cache.get("run-1").is_some());
    assert!(cache.get("run-300").is_some());
}

#[test]
fn test_expired_read_then_restage() {
    let config = CacheConfig::new(Duration::from_millis(50), 10);
    let mut cache: BoundedTtlCache<Scenario> =
        BoundedTtlCache::new(config, key::derive).unwrap();

    cache.set(Scenario::new("x", "v1"));

    sleep(Duration::from_millis(60));
    assert_eq!(cache.get("x"), None, "entry past its TTL reads as absent");

    // Re-staging the same key starts a fresh TTL window
    cache.set(Scenario::new("x", "v2"));
    sleep(Duration::from_millis(10));
    let revived = cache.get("x").expect("restaged entry is live again");
    assert_eq!(revived.name, "v2");
}

#[test]
fn test_snapshot_includes_expired_until_read() {
    let config = CacheConfig::new(Duration::from_millis(40), 10);
    let mut cache: BoundedTtlCache<Run> =
        BoundedTtlCache::new(config, key::derive).unwrap();

    cache.set(Run::new("run-1", "scn-1"));
    sleep(Duration::from_millis(60));

    // The entry has aged out but nothing has observed it, so listings
    // still include it.
    assert_eq!(cache.values().len(), 1);

    // A point read prunes it, after which the snapshot agrees.
    assert_eq!(cache.get("run-1"), None);
    assert!(cache.values().is_empty());
}

#[test]
fn test_shared_cache_across_threads() {
    let cache = SharedCache::new(run_cache());

    let mut handles = Vec::new();
    for worker in 0..4 {
        let cache = cache.clone();
        handles.push(std::thread::spawn(move || {
            for i in 0..50 {
                cache.set(Run::new(format!("run-{worker}-{i}"), "scn-load"));
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    // 200 distinct runs fit within the 300-entry bound, so nothing evicts
    assert_eq!(cache.len(), 200);
    assert_eq!(cache.stats().evictions, 0);
    assert!(cache.get("run-0-0").is_some());
    assert!(cache.get("run-3-49").is_some());
}
