//! # Target Domain Model
//!
//! Defines the domain a discovery run is scoped to, plus the normalization
//! rules every candidate hostname must pass before it is accepted.
//!
//! Every hostname kept by a run satisfies the containment invariant:
//! it equals the target domain or ends with `"." + target_domain`.

use std::fmt;
use std::str::FromStr;

/// The apex domain a run enumerates subdomains of.
///
/// Stored pre-normalized: lowercase, no scheme, no trailing dot. Parsing
/// rejects anything that is not a plausible registered domain so that bad
/// input fails at the command line instead of mid-run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetDomain(String);

impl TargetDomain {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds the brute-force candidate `label.domain`.
    pub fn candidate(&self, label: &str) -> String {
        format!("{}.{}", label, self.0)
    }

    /// Checks the containment invariant for an already-normalized hostname.
    pub fn contains(&self, hostname: &str) -> bool {
        hostname == self.0 || hostname.ends_with(&format!(".{}", self.0))
    }

    /// Normalizes a raw string from any source into a hostname scoped to
    /// this domain.
    ///
    /// Lowercases, trims, strips schemes, wildcard prefixes and stray dots.
    /// Returns `None` for anything empty, malformed or outside the target
    /// domain; out-of-scope names are dropped silently, they are expected
    /// in passive-source payloads.
    pub fn normalize(&self, raw: &str) -> Option<String> {
        let mut name = raw.trim().to_ascii_lowercase();

        for scheme in ["https://", "http://"] {
            if let Some(rest) = name.strip_prefix(scheme) {
                name = rest.to_string();
            }
        }

        let name = name
            .trim_start_matches("*.")
            .trim_matches('.')
            .to_string();

        if name.is_empty() || !name.chars().all(is_hostname_char) {
            return None;
        }

        self.contains(&name).then_some(name)
    }
}

impl fmt::Display for TargetDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TargetDomain {
    type Err = String;

    /// Parses a string into a `TargetDomain`.
    ///
    /// Accepts `example.com` style input, case-insensitive, with an optional
    /// trailing dot. Schemes, paths, wildcards and single labels are
    /// rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let domain = s.trim().trim_end_matches('.').to_ascii_lowercase();

        if domain.is_empty() {
            return Err("target domain cannot be empty".to_string());
        }
        if !domain.contains('.') {
            return Err(format!("invalid target domain: {s} (expected e.g. example.com)"));
        }

        let labels_ok = domain.split('.').all(|label| {
            !label.is_empty()
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
                && !label.starts_with('-')
                && !label.ends_with('-')
        });
        if !labels_ok {
            return Err(format!("invalid target domain: {s}"));
        }

        Ok(Self(domain))
    }
}

fn is_hostname_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_'
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
