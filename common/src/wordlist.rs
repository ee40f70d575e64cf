//! Wordlist handling for the brute-force phase.
//!
//! A wordlist is a newline-delimited file of bare labels (`www`, `mail`,
//! ...). When no file is supplied the built-in list of common labels is
//! used instead.

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::warn;

/// Common subdomain labels, used when no wordlist file is supplied.
pub const DEFAULT_LABELS: &[&str] = &[
    "www", "mail", "ftp", "localhost", "webmail", "smtp", "pop", "ns1", "webdisk",
    "ns2", "cpanel", "whm", "autodiscover", "autoconfig", "admin", "test", "mx",
    "portal", "blog", "dev", "api", "cloud", "vpn", "secure", "server", "mobile",
    "docs", "shop", "forum", "login", "app", "cdn", "stage", "beta", "pay", "owa",
    "dashboard", "images", "support", "git", "gitlab", "jenkins", "intranet",
    "media", "store", "web", "panel", "wiki", "help", "moodle", "status", "crm",
    "student", "alumni", "library", "elearning", "e-learning", "sso", "research",
    "mail2", "remote", "db", "database", "apps", "calendar", "chat", "citrix",
    "connect", "data", "demo", "directory", "dl", "dns", "host", "hr", "jobs",
    "learn", "lms", "local", "m", "manage", "mgmt", "monitor", "new", "news",
    "old", "online", "partners", "pma", "prod", "project", "proxy", "ra",
    "remove", "reports", "sandbox", "search", "services", "share", "staff",
    "study", "training", "uat", "upload", "video", "videos", "workspace", "www2",
];

/// Returns the built-in labels as owned strings.
pub fn default_labels() -> Vec<String> {
    DEFAULT_LABELS.iter().map(|s| s.to_string()).collect()
}

/// Loads labels from a wordlist file.
///
/// Blank lines and `#` comments are skipped. Entries containing dots are
/// not labels and are skipped with a warning; an unreadable file is a
/// configuration failure and aborts the run.
pub fn load(path: &Path) -> anyhow::Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read wordlist {}", path.display()))?;

    let mut labels = Vec::new();
    for line in contents.lines() {
        let label = line.trim();
        if label.is_empty() || label.starts_with('#') {
            continue;
        }
        if label.contains('.') {
            warn!("Skipping wordlist entry '{label}': labels cannot contain dots");
            continue;
        }
        labels.push(label.to_string());
    }
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_list_shape() {
        assert!(DEFAULT_LABELS.len() >= 100);
        assert!(DEFAULT_LABELS.contains(&"www"));
        // default entries are labels, never dotted hostnames
        assert!(DEFAULT_LABELS.iter().all(|label| !label.contains('.')));
    }

    #[test]
    fn test_load_filters_invalid_entries() {
        let path = std::env::temp_dir().join(format!("subfin-wordlist-{}.txt", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "www").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "# comment").unwrap();
        writeln!(file, "  mail  ").unwrap();
        writeln!(file, "not.a.label").unwrap();

        let labels = load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(labels, vec!["www".to_string(), "mail".to_string()]);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        assert!(load(Path::new("/nonexistent/subfin-wordlist")).is_err());
    }
}
