//! Passive OSINT sources for subdomain discovery.
//!
//! Each source answers one question over one outbound request: "which
//! hostnames under this domain has the provider observed?". Parsing of the
//! provider-specific payload stays inside the variant; callers only see raw
//! candidate strings and normalize/filter them afterwards.
//!
//! Sources are best-effort by contract. A failing source returns a
//! [`SourceError`] and contributes nothing; it must never take the other
//! sources or the run down with it.

use std::time::Duration;

use async_trait::async_trait;
use rand::seq::IndexedRandom;
use reqwest::header::USER_AGENT;
use reqwest::{Client, RequestBuilder, StatusCode};
use thiserror::Error;

mod alienvault;
mod crtsh;
mod hackertarget;
mod virustotal;

pub use alienvault::AlienVault;
pub use crtsh::CrtSh;
pub use hackertarget::HackerTarget;
pub use virustotal::VirusTotal;

/// Why a source produced no hostnames.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// A passive data source queried once per run.
#[async_trait]
pub trait Source: Send + Sync {
    /// Short provider name, used in logs and the per-source report.
    fn name(&self) -> &'static str;

    /// Queries the provider and returns raw candidate hostnames.
    ///
    /// Returned strings are unnormalized and may contain names outside the
    /// target domain; the caller filters them. At most one request is made,
    /// except for a source's documented one-shot fallback.
    async fn fetch(&self, domain: &str) -> Result<Vec<String>, SourceError>;
}

/// Browser User-Agents rotated across requests. A fixed list handed to each
/// request builder, never process-wide mutable state.
pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/92.0.4515.107 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:90.0) Gecko/20100101 Firefox/90.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.1.1 Safari/605.1.15",
];

/// Builds the HTTP client shared by all sources in a run.
pub fn build_client(timeout: Duration) -> Result<Client, SourceError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(SourceError::Transport)
}

/// Every configured source, in no particular order.
pub fn all(client: &Client) -> Vec<Box<dyn Source>> {
    vec![
        Box::new(CrtSh::new(client.clone())),
        Box::new(VirusTotal::new(client.clone())),
        Box::new(AlienVault::new(client.clone())),
        Box::new(HackerTarget::new(client.clone())),
    ]
}

/// Attaches a User-Agent picked from [`USER_AGENTS`] to a request.
fn with_user_agent(request: RequestBuilder) -> RequestBuilder {
    let agent = USER_AGENTS
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(USER_AGENTS[0]);
    request.header(USER_AGENT, agent)
}

/// Shared GET helper: one request, status checked, body returned as text.
async fn get_text(client: &Client, url: &str) -> Result<String, SourceError> {
    let response = with_user_agent(client.get(url)).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status(status));
    }
    Ok(response.text().await?)
}
