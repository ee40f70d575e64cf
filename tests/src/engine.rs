use std::collections::HashSet;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use subfin_common::domain::TargetDomain;
use subfin_core::brute::{ProbeOutcome, Prober};
use subfin_core::engine::Engine;
use subfin_sources::{Source, SourceError};

/// Source that answers with a fixed set of raw names.
struct StaticSource {
    name: &'static str,
    names: Vec<&'static str>,
}

impl StaticSource {
    fn new(name: &'static str, names: &[&'static str]) -> Box<Self> {
        Box::new(Self { name, names: names.to_vec() })
    }
}

#[async_trait]
impl Source for StaticSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch(&self, _domain: &str) -> Result<Vec<String>, SourceError> {
        Ok(self.names.iter().map(|s| s.to_string()).collect())
    }
}

/// Source that always fails, standing in for timeouts and broken payloads.
struct FailingSource(&'static str);

#[async_trait]
impl Source for FailingSource {
    fn name(&self) -> &'static str {
        self.0
    }

    async fn fetch(&self, _domain: &str) -> Result<Vec<String>, SourceError> {
        Err(SourceError::Malformed("synthetic outage".into()))
    }
}

/// Prober backed by a fixed table of resolvable hostnames.
struct TableProber {
    resolvable: HashSet<String>,
}

impl TableProber {
    fn new(hostnames: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            resolvable: hostnames.iter().map(|s| s.to_string()).collect(),
        })
    }
}

#[async_trait]
impl Prober for TableProber {
    async fn probe(&self, label: &str, domain: &TargetDomain) -> ProbeOutcome {
        let candidate = domain.candidate(label);
        if self.resolvable.contains(&candidate) {
            ProbeOutcome::Found(candidate)
        } else {
            ProbeOutcome::NotFound
        }
    }
}

fn example_com() -> TargetDomain {
    TargetDomain::from_str("example.com").unwrap()
}

fn labels(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|s| s.to_string()).collect()
}

/// Scenario: one source delivers, one times out, one brute label resolves.
/// The apex is never auto-added; the result is exactly the three discovered
/// hostnames, sorted.
#[tokio::test]
async fn passive_and_brute_results_merge() {
    let sources: Vec<Box<dyn Source>> = vec![
        StaticSource::new("alpha", &["www.example.com", "api.example.com"]),
        Box::new(FailingSource("beta")),
    ];
    let prober = TableProber::new(&["mail.example.com"]);

    let mut engine = Engine::new(example_com(), sources, prober, 4);
    let report = engine.run(labels(&["mail"])).await.unwrap();

    assert_eq!(report.total, 3);
    assert_eq!(report.brute_forced, 1);
    assert_eq!(
        engine.registry().snapshot(),
        vec!["api.example.com", "mail.example.com", "www.example.com"]
    );
}

/// Scenario: only `www` resolves, so the brute phase contributes exactly
/// one hostname.
#[tokio::test]
async fn brute_force_only_keeps_resolvable_candidates() {
    let prober = TableProber::new(&["www.example.com"]);

    let mut engine = Engine::new(example_com(), Vec::new(), prober, 10);
    let report = engine.run(labels(&["www", "doesnotexist123xyz"])).await.unwrap();

    assert_eq!(report.brute_forced, 1);
    assert_eq!(engine.registry().snapshot(), vec!["www.example.com"]);
}

/// Scenario: every source fails and the wordlist is empty. The run is a
/// clean success reporting zero discoveries, not a crash.
#[tokio::test]
async fn all_sources_failing_is_still_a_successful_run() {
    let sources: Vec<Box<dyn Source>> = vec![
        Box::new(FailingSource("a")),
        Box::new(FailingSource("b")),
        Box::new(FailingSource("c")),
        Box::new(FailingSource("d")),
    ];
    let prober = TableProber::new(&[]);

    let mut engine = Engine::new(example_com(), sources, prober, 10);
    let report = engine.run(Vec::new()).await.unwrap();

    assert_eq!(report.total, 0);
    assert!(report.sources.iter().all(|s| s.failed));
    assert!(engine.registry().is_empty());
}

/// Three of four sources failing must not cost the fourth its results.
#[tokio::test]
async fn failure_isolation_between_sources() {
    let sources: Vec<Box<dyn Source>> = vec![
        Box::new(FailingSource("a")),
        Box::new(FailingSource("b")),
        Box::new(FailingSource("c")),
        StaticSource::new("survivor", &["cdn.example.com"]),
    ];
    let prober = TableProber::new(&[]);

    let mut engine = Engine::new(example_com(), sources, prober, 10);
    let report = engine.run(Vec::new()).await.unwrap();

    assert_eq!(report.total, 1);
    assert_eq!(engine.registry().snapshot(), vec!["cdn.example.com"]);

    let survivor = report.sources.iter().find(|s| s.name == "survivor").unwrap();
    assert!(!survivor.failed);
    assert_eq!(survivor.discovered, 1);
}

/// The same hostname reported by several sources and the brute sweep ends
/// up in the set exactly once, and only the first producer counts it.
#[tokio::test]
async fn duplicate_discoveries_count_once() {
    let sources: Vec<Box<dyn Source>> = vec![
        StaticSource::new("alpha", &["www.example.com", "WWW.example.com."]),
        StaticSource::new("bravo", &["www.example.com"]),
    ];
    let prober = TableProber::new(&["www.example.com"]);

    let mut engine = Engine::new(example_com(), sources, prober, 2);
    let report = engine.run(labels(&["www"])).await.unwrap();

    assert_eq!(report.total, 1);
    assert_eq!(report.brute_forced, 0);
    let discovered: usize = report.sources.iter().map(|s| s.discovered).sum();
    assert_eq!(discovered, 1);
}

/// Out-of-scope names from a source never reach the set.
#[tokio::test]
async fn foreign_hostnames_are_discarded() {
    let sources: Vec<Box<dyn Source>> = vec![StaticSource::new(
        "alpha",
        &["evil.com", "example.com.evil.com", "ok.example.com"],
    )];
    let prober = TableProber::new(&[]);

    let mut engine = Engine::new(example_com(), sources, prober, 10);
    engine.run(Vec::new()).await.unwrap();

    assert_eq!(engine.registry().snapshot(), vec!["ok.example.com"]);
}

/// Snapshot ordering holds for any insertion interleaving.
#[tokio::test]
async fn snapshot_is_strictly_sorted() {
    let sources: Vec<Box<dyn Source>> = vec![
        StaticSource::new("alpha", &["zz.example.com", "aa.example.com"]),
        StaticSource::new("bravo", &["mm.example.com", "aa.example.com"]),
    ];
    let prober = TableProber::new(&[]);

    let mut engine = Engine::new(example_com(), sources, prober, 10);
    engine.run(Vec::new()).await.unwrap();

    let snapshot = engine.registry().snapshot();
    assert_eq!(snapshot, vec!["aa.example.com", "mm.example.com", "zz.example.com"]);
    assert!(snapshot.windows(2).all(|pair| pair[0] < pair[1]));
}

/// No sources and an empty wordlist is the one fatal configuration.
#[tokio::test]
async fn nothing_to_do_is_fatal() {
    let prober = TableProber::new(&[]);
    let mut engine = Engine::new(example_com(), Vec::new(), prober, 10);

    assert!(engine.run(Vec::new()).await.is_err());
}

/// Every wordlist entry is probed exactly once, found or not, and the
/// progress callback sees the final count.
#[tokio::test]
async fn progress_callback_sees_every_probe() {
    let prober = TableProber::new(&["www.example.com"]);
    let seen = Arc::new(AtomicUsize::new(0));
    let seen_ref = seen.clone();

    let mut engine = Engine::new(example_com(), Vec::new(), prober, 3)
        .on_probe_done(Box::new(move |completed| {
            seen_ref.fetch_max(completed, Ordering::Relaxed);
        }));
    engine.run(labels(&["www", "dev", "stage", "beta", "prod"])).await.unwrap();

    assert_eq!(seen.load(Ordering::Relaxed), 5);
}
