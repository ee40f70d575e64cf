//! HackerTarget host search.
//!
//! Plain-text API: one `hostname,ip` pair per line on success, or a body
//! starting with an `error` prefix when the quota is exhausted or the query
//! is rejected. The error prefix counts as a malformed payload, not a
//! success with zero results.

use async_trait::async_trait;
use reqwest::Client;

use crate::{Source, SourceError, get_text};

pub struct HackerTarget {
    client: Client,
}

impl HackerTarget {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Source for HackerTarget {
    fn name(&self) -> &'static str {
        "hackertarget"
    }

    async fn fetch(&self, domain: &str) -> Result<Vec<String>, SourceError> {
        let url = format!("https://api.hackertarget.com/hostsearch/?q={domain}");
        let body = get_text(&self.client, &url).await?;
        parse_host_search(&body)
    }
}

fn parse_host_search(body: &str) -> Result<Vec<String>, SourceError> {
    let trimmed = body.trim();
    if trimmed.to_ascii_lowercase().starts_with("error") {
        return Err(SourceError::Malformed(trimmed.to_string()));
    }

    Ok(trimmed
        .lines()
        .filter_map(|line| line.split_once(','))
        .map(|(hostname, _ip)| hostname.to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_host_search() {
        let body = "www.example.com,192.0.2.1\napi.example.com,192.0.2.2\n";
        let names = parse_host_search(body).unwrap();
        assert_eq!(names, vec!["www.example.com", "api.example.com"]);
    }

    #[test]
    fn test_parse_host_search_skips_lines_without_separator() {
        let names = parse_host_search("www.example.com,192.0.2.1\ngarbage line\n").unwrap();
        assert_eq!(names, vec!["www.example.com"]);
    }

    #[test]
    fn test_parse_host_search_error_prefix() {
        assert!(matches!(
            parse_host_search("error check your search parameter"),
            Err(SourceError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_host_search_quota_message_yields_nothing() {
        let names = parse_host_search("API count exceeded - Increase Quota with Membership").unwrap();
        assert!(names.is_empty());
    }
}
