//! VirusTotal domain-reputation graph.
//!
//! The unauthenticated UI endpoint lists up to 40 observed subdomains as
//! `{ "data": [ { "id": "<hostname>" }, ... ] }`. Heavily rate-limited;
//! anything but a clean 200 with valid JSON is a failed outcome.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{Source, SourceError, get_text};

pub struct VirusTotal {
    client: Client,
}

#[derive(Debug, Deserialize)]
struct Listing {
    #[serde(default)]
    data: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    id: String,
}

impl VirusTotal {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Source for VirusTotal {
    fn name(&self) -> &'static str {
        "virustotal"
    }

    async fn fetch(&self, domain: &str) -> Result<Vec<String>, SourceError> {
        let url = format!("https://www.virustotal.com/ui/domains/{domain}/subdomains?limit=40");
        let body = get_text(&self.client, &url).await?;
        parse_listing(&body)
    }
}

fn parse_listing(body: &str) -> Result<Vec<String>, SourceError> {
    let listing: Listing =
        serde_json::from_str(body).map_err(|e| SourceError::Malformed(e.to_string()))?;
    Ok(listing.data.into_iter().map(|entry| entry.id).collect())
}
