//! AlienVault OTX passive DNS.
//!
//! Historical resolution data: `{ "passive_dns": [ { "hostname": ... }, ... ] }`.
//! Records for unrelated domains show up routinely; scoping is left to the
//! caller's normalization pass.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{Source, SourceError, get_text};

pub struct AlienVault {
    client: Client,
}

#[derive(Debug, Deserialize)]
struct PassiveDns {
    #[serde(default)]
    passive_dns: Vec<DnsRecord>,
}

#[derive(Debug, Deserialize)]
struct DnsRecord {
    #[serde(default)]
    hostname: String,
}

impl AlienVault {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Source for AlienVault {
    fn name(&self) -> &'static str {
        "alienvault"
    }

    async fn fetch(&self, domain: &str) -> Result<Vec<String>, SourceError> {
        let url =
            format!("https://otx.alienvault.com/api/v1/indicators/domain/{domain}/passive_dns");
        let body = get_text(&self.client, &url).await?;
        parse_passive_dns(&body)
    }
}

fn parse_passive_dns(body: &str) -> Result<Vec<String>, SourceError> {
    let listing: PassiveDns =
        serde_json::from_str(body).map_err(|e| SourceError::Malformed(e.to_string()))?;

    Ok(listing
        .passive_dns
        .into_iter()
        .map(|record| record.hostname)
        .filter(|hostname| !hostname.is_empty())
        .collect())
}
