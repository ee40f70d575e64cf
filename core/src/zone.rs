//! DNS zone-transfer probing.
//!
//! A misconfigured nameserver answers an AXFR request from anyone and hands
//! over the full zone. The probe looks up the domain's NS records and asks
//! each nameserver once, over plain TCP on port 53: a length-prefixed AXFR
//! query and a single response read. One shot per nameserver, no retry;
//! one unreachable server never stops the others from being probed.

use std::collections::BTreeSet;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use hickory_resolver::TokioAsyncResolver;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_resolver::proto::rr::{Name, RecordType};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, info};
use subfin_common::domain::TargetDomain;

const DNS_TCP_PORT: u16 = 53;

/// What one nameserver said to our AXFR request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneOutcome {
    /// The server handed the zone over: the misconfiguration case.
    /// Carries the distinct record names from the transfer.
    Transferred(Vec<String>),
    /// The server answered but declined, which is the healthy behavior.
    Refused,
    /// Could not complete the exchange at all.
    Unreachable(String),
}

#[derive(Debug, Clone)]
pub struct ZoneProbe {
    pub nameserver: String,
    pub outcome: ZoneOutcome,
}

/// Probes every authoritative nameserver of `domain` for open zone
/// transfers. Failing the NS lookup itself is fatal; per-server failures
/// are not.
pub async fn probe_zone_transfers(
    domain: &TargetDomain,
    io_timeout: Duration,
) -> anyhow::Result<Vec<ZoneProbe>> {
    let resolver = TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default());

    let ns_lookup = resolver
        .ns_lookup(domain.as_str())
        .await
        .with_context(|| format!("NS lookup failed for {domain}"))?;

    let zone = Name::from_utf8(domain.as_str()).context("domain is not a valid DNS name")?;

    let mut probes = Vec::new();
    for ns in ns_lookup.iter() {
        let nameserver = ns.0.to_utf8().trim_end_matches('.').to_string();
        info!("Attempting zone transfer against {nameserver}");

        let outcome = match resolve_nameserver(&resolver, &nameserver).await {
            Ok(addr) => attempt_axfr(&zone, addr, io_timeout).await,
            Err(err) => ZoneOutcome::Unreachable(err.to_string()),
        };
        probes.push(ZoneProbe { nameserver, outcome });
    }
    Ok(probes)
}

async fn resolve_nameserver(
    resolver: &TokioAsyncResolver,
    nameserver: &str,
) -> anyhow::Result<SocketAddr> {
    let lookup = resolver
        .lookup_ip(nameserver)
        .await
        .with_context(|| format!("could not resolve nameserver {nameserver}"))?;
    let ip = lookup
        .iter()
        .next()
        .with_context(|| format!("nameserver {nameserver} has no address records"))?;
    Ok(SocketAddr::new(ip, DNS_TCP_PORT))
}

/// One AXFR exchange: connect, send the query with the TCP two-byte length
/// prefix, read a single response message.
async fn attempt_axfr(zone: &Name, addr: SocketAddr, io_timeout: Duration) -> ZoneOutcome {
    let request = match build_axfr_query(zone) {
        Ok(bytes) => bytes,
        Err(err) => return ZoneOutcome::Unreachable(err.to_string()),
    };

    match timeout(io_timeout, axfr_exchange(addr, &request)).await {
        Ok(Ok(response)) => classify_response(&response),
        Ok(Err(err)) => ZoneOutcome::Unreachable(err.to_string()),
        Err(_) => ZoneOutcome::Unreachable(format!("timed out after {io_timeout:?}")),
    }
}

fn build_axfr_query(zone: &Name) -> anyhow::Result<Vec<u8>> {
    let mut message = Message::new();
    message
        .set_id(rand::random())
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(false)
        .add_query(Query::query(zone.clone(), RecordType::AXFR));

    let payload = message.to_vec().context("failed to encode AXFR query")?;

    let mut framed = Vec::with_capacity(payload.len() + 2);
    framed.extend_from_slice(&(payload.len() as u16).to_be_bytes());
    framed.extend_from_slice(&payload);
    Ok(framed)
}

async fn axfr_exchange(addr: SocketAddr, request: &[u8]) -> anyhow::Result<Message> {
    let mut stream = TcpStream::connect(addr)
        .await
        .with_context(|| format!("TCP connect to {addr} failed"))?;
    stream.write_all(request).await.context("sending AXFR query")?;

    let mut length_prefix = [0u8; 2];
    stream
        .read_exact(&mut length_prefix)
        .await
        .context("reading response length")?;
    let length = u16::from_be_bytes(length_prefix) as usize;

    let mut payload = vec![0u8; length];
    stream
        .read_exact(&mut payload)
        .await
        .context("reading response payload")?;

    Message::from_vec(&payload).context("parsing AXFR response")
}

fn classify_response(response: &Message) -> ZoneOutcome {
    if response.response_code() != ResponseCode::NoError {
        debug!("AXFR answered with {}", response.response_code());
        return ZoneOutcome::Refused;
    }

    let names: BTreeSet<String> = response
        .answers()
        .iter()
        .map(|record| record.name().to_utf8().trim_end_matches('.').to_string())
        .collect();

    if names.is_empty() {
        ZoneOutcome::Refused
    } else {
        ZoneOutcome::Transferred(names.into_iter().collect())
    }
}
