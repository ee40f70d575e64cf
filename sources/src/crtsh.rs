//! Certificate-transparency search via crt.sh.
//!
//! Primary query asks for JSON records; each record's `name_value` field
//! carries one or more certificate names joined by newlines (older records
//! also used commas). If the JSON path fails in any way the source falls
//! back, once, to scraping the hostname cells of the plain HTML result
//! table. No retries beyond that single fallback.

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{Source, SourceError, get_text};

pub struct CrtSh {
    client: Client,
}

#[derive(Debug, Deserialize)]
struct CertRecord {
    #[serde(default)]
    name_value: String,
}

impl CrtSh {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn fetch_json(&self, domain: &str) -> Result<Vec<String>, SourceError> {
        let url = format!("https://crt.sh/?q=%.{domain}&output=json");
        let body = get_text(&self.client, &url).await?;
        parse_records(&body)
    }

    async fn fetch_html(&self, domain: &str) -> Result<Vec<String>, SourceError> {
        let url = format!("https://crt.sh/?q=%.{domain}");
        let body = get_text(&self.client, &url).await?;
        Ok(parse_result_table(&body, domain))
    }
}

#[async_trait]
impl Source for CrtSh {
    fn name(&self) -> &'static str {
        "crt.sh"
    }

    async fn fetch(&self, domain: &str) -> Result<Vec<String>, SourceError> {
        match self.fetch_json(domain).await {
            Ok(names) => Ok(names),
            Err(err) => {
                warn!("crt.sh JSON query failed ({err}), trying the HTML result table");
                self.fetch_html(domain).await
            }
        }
    }
}

fn parse_records(body: &str) -> Result<Vec<String>, SourceError> {
    let records: Vec<CertRecord> =
        serde_json::from_str(body).map_err(|e| SourceError::Malformed(e.to_string()))?;

    let names = records
        .iter()
        .flat_map(|record| record.name_value.split(['\n', ',']))
        .map(str::to_string)
        .collect();
    Ok(names)
}

/// Extracts hostname-bearing `<td>` cells from the HTML result table.
///
/// The table mixes hostnames with dates, issuers and serial numbers, so
/// only cells mentioning the target domain are kept; full normalization
/// happens in the caller like for every other source.
fn parse_result_table(body: &str, domain: &str) -> Vec<String> {
    let cell = Selector::parse("td").expect("static selector");
    let document = Html::parse_document(body);

    let names: Vec<String> = document
        .select(&cell)
        .map(|td| td.text().collect::<String>().trim().to_string())
        .filter(|text| text.contains(domain))
        .collect();

    debug!("crt.sh HTML fallback extracted {} table cells", names.len());
    names
}
