mod commands;
mod terminal;

use std::time::Duration;

use commands::{CommandLine, Commands, discover, zone};
use subfin_common::config::RunConfig;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();
    print::banner();

    match commands.command {
        Commands::Discover { domain, wordlist, output, threads, timeout } => {
            let cfg = RunConfig {
                wordlist,
                output,
                workers: threads,
                http_timeout: Duration::from_secs(timeout),
                ..RunConfig::default()
            };
            print::header("subdomain discovery");
            discover::discover(domain, cfg).await
        }
        Commands::Zone { domain } => {
            print::header("zone transfer check");
            zone::zone(domain).await
        }
    }
}
