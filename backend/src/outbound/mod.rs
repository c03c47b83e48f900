//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **http**: reqwest-backed GET transport
//! - **geocoding**: city to coordinate resolution
//! - **weather_gov**: two-hop forecast lookup and period parsing
//! - **cache**: in-process forecast cache
//!
//! Adapters are thin translators between domain types and upstream
//! representations. They contain no business logic.

pub mod cache;
pub mod geocoding;
pub mod http;
pub mod weather_gov;
