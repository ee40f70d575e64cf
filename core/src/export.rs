//! Result export: the already-sorted registry snapshot, one hostname per
//! line, no header or trailer.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use subfin_common::domain::TargetDomain;

/// Default destination: named from the domain and a local timestamp, in
/// the current directory.
pub fn default_output_path(domain: &TargetDomain) -> PathBuf {
    PathBuf::from(format!(
        "{}_subdomains_{}.txt",
        domain,
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

/// Writes hostnames to `path`, one per line.
pub fn write_hostnames(path: &Path, hostnames: &[String]) -> anyhow::Result<()> {
    let mut contents = String::with_capacity(hostnames.iter().map(|h| h.len() + 1).sum());
    for hostname in hostnames {
        contents.push_str(hostname);
        contents.push('\n');
    }

    fs::write(path, contents)
        .with_context(|| format!("failed to write results to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_write_hostnames_line_format() {
        let path = std::env::temp_dir().join(format!("subfin-export-{}.txt", std::process::id()));
        let hosts = vec!["api.example.com".to_string(), "www.example.com".to_string()];

        write_hostnames(&path, &hosts).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(written, "api.example.com\nwww.example.com\n");
    }

    #[test]
    fn test_default_output_path_shape() {
        let domain = TargetDomain::from_str("example.com").unwrap();
        let path = default_output_path(&domain);
        let name = path.file_name().unwrap().to_string_lossy().into_owned();

        assert!(name.starts_with("example.com_subdomains_"));
        assert!(name.ends_with(".txt"));
    }
}
