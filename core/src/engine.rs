//! # Discovery Engine
//!
//! Runs a discovery pass in two strictly sequential phases over one shared
//! [`HostRegistry`]:
//!
//! 1. **Passive phase**: every configured [`Source`] runs as its own task;
//!    all are joined before the next phase starts. A source failing (network,
//!    status, parse) is logged and contributes nothing; it never aborts the
//!    run or its siblings.
//! 2. **Brute-force phase**: the wordlist is swept by a bounded pool of
//!    probe futures. Entry order is irrelevant; only the per-entry outcomes
//!    matter.
//!
//! The phase split is deliberate: it caps peak outbound connections and has
//! all passive results in the registry before the much larger sweep begins.

use std::mem;
use std::sync::Arc;

use anyhow::bail;
use futures::future::join_all;
use futures::stream::{self, StreamExt};
use tracing::{info, warn};
use subfin_common::domain::TargetDomain;
use subfin_sources::Source;

use crate::brute::{ProbeOutcome, Prober};
use crate::registry::HostRegistry;

/// One passive source's contribution to a run.
#[derive(Debug, Clone)]
pub struct SourceReport {
    pub name: &'static str,
    /// Hostnames this source was the first to discover.
    pub discovered: usize,
    pub failed: bool,
}

/// What a finished run looked like, for the summary output.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryReport {
    pub sources: Vec<SourceReport>,
    /// Hostnames first discovered by the brute-force sweep.
    pub brute_forced: usize,
    /// Distinct hostnames across all producers.
    pub total: usize,
}

type ProgressFn = Box<dyn Fn(usize) + Send + Sync>;

pub struct Engine {
    domain: TargetDomain,
    sources: Vec<Box<dyn Source>>,
    prober: Arc<dyn Prober>,
    registry: Arc<HostRegistry>,
    workers: usize,
    on_probe_done: Option<ProgressFn>,
}

impl Engine {
    pub fn new(
        domain: TargetDomain,
        sources: Vec<Box<dyn Source>>,
        prober: Arc<dyn Prober>,
        workers: usize,
    ) -> Self {
        Self {
            domain,
            sources,
            prober,
            registry: Arc::new(HostRegistry::new()),
            workers: workers.max(1),
            on_probe_done: None,
        }
    }

    /// Registers a callback invoked with the number of completed probes
    /// after each brute-force lookup finishes. Drives the cli progress bar.
    pub fn on_probe_done(mut self, callback: ProgressFn) -> Self {
        self.on_probe_done = Some(callback);
        self
    }

    pub fn registry(&self) -> Arc<HostRegistry> {
        self.registry.clone()
    }

    /// Executes both phases and returns the run summary.
    ///
    /// Zero results from either phase is a normal outcome. The only fatal
    /// condition is having nothing to do at all: no sources and an empty
    /// wordlist.
    pub async fn run(&mut self, labels: Vec<String>) -> anyhow::Result<DiscoveryReport> {
        if self.sources.is_empty() && labels.is_empty() {
            bail!("nothing to do: no passive sources configured and the wordlist is empty");
        }

        let sources = self.run_passive_phase().await;
        let brute_forced = self.run_brute_phase(labels).await;

        Ok(DiscoveryReport {
            sources,
            brute_forced,
            total: self.registry.len(),
        })
    }

    /// Launches every source as its own task and waits for all of them,
    /// success or failure, before returning.
    async fn run_passive_phase(&mut self) -> Vec<SourceReport> {
        let handles: Vec<_> = mem::take(&mut self.sources)
            .into_iter()
            .map(|source| {
                let domain = self.domain.clone();
                let registry = self.registry.clone();
                tokio::spawn(async move { query_source(source, &domain, &registry).await })
            })
            .collect();

        join_all(handles)
            .await
            .into_iter()
            .filter_map(|joined| joined.ok())
            .collect()
    }

    /// Sweeps the wordlist with at most `workers` probes in flight.
    async fn run_brute_phase(&self, labels: Vec<String>) -> usize {
        let mut outcomes = stream::iter(labels)
            .map(|label| {
                let prober = self.prober.clone();
                let domain = self.domain.clone();
                async move { prober.probe(&label, &domain).await }
            })
            .buffer_unordered(self.workers);

        let mut completed = 0;
        let mut discovered = 0;
        while let Some(outcome) = outcomes.next().await {
            completed += 1;
            if let ProbeOutcome::Found(candidate) = outcome {
                // candidates are built from label + domain, but normalize
                // anyway so a hostile wordlist cannot smuggle names in
                if let Some(hostname) = self.domain.normalize(&candidate) {
                    if self.registry.insert(hostname.clone()) {
                        info!("Discovered subdomain: {hostname}");
                        discovered += 1;
                    }
                }
            }
            if let Some(callback) = &self.on_probe_done {
                callback(completed);
            }
        }
        discovered
    }
}

async fn query_source(
    source: Box<dyn Source>,
    domain: &TargetDomain,
    registry: &HostRegistry,
) -> SourceReport {
    let name = source.name();
    info!("Searching {name} for subdomains of {domain}");

    match source.fetch(domain.as_str()).await {
        Ok(raw_names) => {
            let mut discovered = 0;
            for raw in raw_names {
                let Some(hostname) = domain.normalize(&raw) else {
                    continue;
                };
                if registry.insert(hostname.clone()) {
                    info!("Discovered from {name}: {hostname}");
                    discovered += 1;
                }
            }
            SourceReport { name, discovered, failed: false }
        }
        Err(err) => {
            warn!("Source {name} failed: {err}");
            SourceReport { name, discovered: 0, failed: true }
        }
    }
}
