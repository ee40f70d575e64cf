//! End-to-end tests for the discovery engine, run entirely against stub
//! sources and probers; nothing here touches the network.

#[cfg(test)]
mod engine;
