//! Discovery engine: orchestrates the passive sources and the DNS
//! brute-force sweep over one shared, deduplicated hostname set.

pub mod brute;
pub mod engine;
pub mod export;
pub mod registry;
pub mod zone;
