use std::time::Duration;

use colored::*;
use tracing::{error, info, warn};

use crate::terminal::print;
use subfin_common::domain::TargetDomain;
use subfin_core::zone::{self, ZoneOutcome};

/// I/O timeout for one AXFR exchange (connect + query + response).
const AXFR_IO_TIMEOUT: Duration = Duration::from_secs(5);

pub async fn zone(domain: TargetDomain) -> anyhow::Result<()> {
    info!("Looking up nameservers for {domain}");
    let probes = zone::probe_zone_transfers(&domain, AXFR_IO_TIMEOUT).await?;

    if probes.is_empty() {
        warn!("No nameservers found for {domain}");
        return Ok(());
    }

    let mut open_transfers = 0;
    for probe in &probes {
        match &probe.outcome {
            ZoneOutcome::Transferred(names) => {
                open_transfers += 1;
                error!(
                    "{} allows zone transfers, {} record names exposed",
                    probe.nameserver,
                    names.len()
                );
                print::tree_list(names);
            }
            ZoneOutcome::Refused => info!("{} refuses zone transfers", probe.nameserver),
            ZoneOutcome::Unreachable(reason) => warn!("{}: {reason}", probe.nameserver),
        }
    }

    print::fat_separator();
    let verdict: ColoredString = if open_transfers == 0 {
        "No nameserver allowed a zone transfer".bold().green()
    } else {
        format!(
            "{open_transfers} of {} nameservers allowed a zone transfer",
            probes.len()
        )
        .bold()
        .red()
    };
    print::centerln(&format!("{verdict}"));
    Ok(())
}
