//! # sonarr-client
//!
//! Typed async client for the Sonarr v3 REST API.
//!
//! The crate has two layers:
//!
//! - **Models** ([`models`]): one serde-backed type per API resource. Every
//!   optional wire field is a [`Field<T>`](field::Field), keeping "key absent"
//!   distinguishable from "key present but null" in both directions.
//! - **Endpoints**: async operations on [`SonarrClient`], grouped per
//!   resource (series, episodes, queue, releases, indexers, notifications,
//!   profiles, tags, root folders, system, commands, history, calendar,
//!   logs).
//!
//! Each call is a single stateless request/response round trip: no retries,
//! no caching, no shared state. Responses outside the documented success
//! statuses either raise [`SonarrError::UnexpectedStatus`] or return `None`,
//! depending on [`SonarrConfig::error_on_unexpected_status`]. Decode
//! mismatches (bad enum values, malformed timestamps, wrong shapes) always
//! fail loudly.
//!
//! ## Usage
//!
//! ```no_run
//! use sonarr_client::{SonarrClient, SonarrConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SonarrConfig::new("http://localhost:8989", "your-api-key");
//!     let client = SonarrClient::from_config(&config)?;
//!
//!     for series in client.list_series(None, None).await?.unwrap_or_default() {
//!         println!(
//!             "{} ({:?})",
//!             series.title.value().map(String::as_str).unwrap_or("?"),
//!             series.status.value()
//!         );
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod endpoints;
mod error;
pub mod field;
mod http;
pub mod models;

pub use client::SonarrClient;
pub use config::SonarrConfig;
pub use error::SonarrError;
pub use field::Field;
pub use http::HttpClient;
