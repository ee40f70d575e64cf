use std::sync::Arc;
use std::time::{Duration, Instant};

use colored::*;
use tracing::info;

use crate::terminal::{print, progress};
use subfin_common::config::RunConfig;
use subfin_common::domain::TargetDomain;
use subfin_common::wordlist;
use subfin_core::brute::DnsProber;
use subfin_core::engine::{DiscoveryReport, Engine};
use subfin_core::export;

pub async fn discover(domain: TargetDomain, cfg: RunConfig) -> anyhow::Result<()> {
    let labels = match &cfg.wordlist {
        Some(path) => wordlist::load(path)?,
        None => wordlist::default_labels(),
    };
    let output = cfg
        .output
        .clone()
        .unwrap_or_else(|| export::default_output_path(&domain));

    info!("Starting subdomain discovery for {domain}");
    info!("Results will be saved to {}", output.display());

    let client = subfin_sources::build_client(cfg.http_timeout)?;
    let sources = subfin_sources::all(&client);
    let prober = Arc::new(DnsProber::new(cfg.resolver_timeout));

    let total_probes = labels.len() as u64;
    let mut engine = Engine::new(domain, sources, prober, cfg.workers).on_probe_done(Box::new(
        move |completed| {
            let bar = progress::get();
            if bar.is_hidden() {
                progress::activate(total_probes, "Brute forcing");
            }
            bar.set_position(completed as u64);
        },
    ));

    let start: Instant = Instant::now();
    let report = engine.run(labels).await?;
    progress::get().finish_and_clear();

    let hostnames = engine.registry().snapshot();
    discovery_ends(&report, start.elapsed());

    if hostnames.is_empty() {
        return Ok(());
    }
    export::write_hostnames(&output, &hostnames)?;
    info!("Results saved to {}", output.display());
    Ok(())
}

fn discovery_ends(report: &DiscoveryReport, total_time: Duration) {
    if report.total == 0 {
        print::no_results();
        return;
    }

    print::header("per-source contributions");
    print_contributions(report);
    print_summary(report.total, total_time);
}

fn print_contributions(report: &DiscoveryReport) {
    const BRUTE_KEY: &str = "brute force";
    let key_width = report
        .sources
        .iter()
        .map(|source| source.name.chars().count())
        .chain([BRUTE_KEY.len()])
        .max()
        .unwrap_or(0);

    for source in &report.sources {
        let value: ColoredString = if source.failed {
            "failed".red()
        } else {
            source.discovered.to_string().normal()
        };
        print::aligned_line(key_width, source.name, value);
    }
    print::aligned_line(key_width, BRUTE_KEY, report.brute_forced);
}

fn print_summary(total: usize, total_time: Duration) {
    let found: ColoredString = format!("{total} subdomains").bold().green();
    let took: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();

    print::fat_separator();
    print::centerln(&format!("Discovery Complete: {found} identified in {took}"));
}
