//! Active DNS brute force.
//!
//! A probe is a pure existence check: does `label.domain` resolve to an
//! address record? Every failure class a resolver can produce (NXDOMAIN,
//! SERVFAIL, timeout) collapses into the same "not found" outcome. Probes
//! hold no per-call state and are safe to run concurrently.

use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use subfin_common::domain::TargetDomain;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The candidate resolved; carries the constructed hostname.
    Found(String),
    /// Any resolution failure. Expected and common, never logged as an error.
    NotFound,
}

/// Attempts to resolve one wordlist candidate under the target domain.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, label: &str, domain: &TargetDomain) -> ProbeOutcome;
}

/// System-resolver probe with a short per-lookup timeout and one attempt.
pub struct DnsProber {
    resolver: TokioAsyncResolver,
}

impl DnsProber {
    pub fn new(timeout: Duration) -> Self {
        let mut opts = ResolverOpts::default();
        opts.timeout = timeout;
        opts.attempts = 1;

        Self {
            resolver: TokioAsyncResolver::tokio(ResolverConfig::default(), opts),
        }
    }
}

#[async_trait]
impl Prober for DnsProber {
    async fn probe(&self, label: &str, domain: &TargetDomain) -> ProbeOutcome {
        let candidate = domain.candidate(label);
        match self.resolver.lookup_ip(candidate.as_str()).await {
            Ok(lookup) if lookup.iter().next().is_some() => ProbeOutcome::Found(candidate),
            _ => ProbeOutcome::NotFound,
        }
    }
}
