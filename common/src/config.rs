use std::path::PathBuf;
use std::time::Duration;

/// Parameters of a single discovery run. Built once from the command line
/// and never mutated while the engine is running.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Wordlist file for the brute-force phase. `None` selects the
    /// built-in default list.
    pub wordlist: Option<PathBuf>,
    /// Destination for the exported results. `None` selects a file named
    /// from the domain and a timestamp.
    pub output: Option<PathBuf>,
    /// Upper bound on concurrent brute-force probes.
    pub workers: usize,
    /// Timeout applied to every passive-source HTTP request.
    pub http_timeout: Duration,
    /// Timeout for a single brute-force DNS lookup.
    ///
    /// Deliberately much shorter than `http_timeout`: a probe that does not
    /// answer within a second is treated as "not found".
    pub resolver_timeout: Duration,
}

pub const DEFAULT_WORKERS: usize = 10;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 5;
pub const RESOLVER_TIMEOUT_SECS: u64 = 1;

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            wordlist: None,
            output: None,
            workers: DEFAULT_WORKERS,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            resolver_timeout: Duration::from_secs(RESOLVER_TIMEOUT_SECS),
        }
    }
}
