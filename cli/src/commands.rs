pub mod discover;
pub mod zone;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use subfin_common::config::{DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_WORKERS};
use subfin_common::domain::TargetDomain;

#[derive(Parser)]
#[command(name = "subfin")]
#[command(about = "A concurrent multi-source subdomain finder.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Discover subdomains from passive sources and DNS brute force
    #[command(alias = "d")]
    Discover {
        /// Domain to enumerate (e.g. example.com)
        domain: TargetDomain,
        /// Wordlist file for brute forcing; built-in list when omitted
        #[arg(short, long)]
        wordlist: Option<PathBuf>,
        /// Output file for the sorted results
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Concurrent brute-force workers
        #[arg(short = 't', long = "threads", default_value_t = DEFAULT_WORKERS)]
        threads: usize,
        /// Per-request timeout for passive sources, in seconds
        #[arg(long, default_value_t = DEFAULT_HTTP_TIMEOUT_SECS)]
        timeout: u64,
    },
    /// Check the domain's nameservers for open zone transfers
    #[command(alias = "z")]
    Zone {
        /// Domain whose nameservers should be probed
        domain: TargetDomain,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
