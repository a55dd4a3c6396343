//! Latest-version resolution across package registries
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Resolver   │────▶│   Fetcher   │────▶│  Registry   │
//! │ (per mgr)   │     │ (HTTP GET)  │     │ (remote)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │  Extract    │
//! │ (JSON/XML)  │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`manager`]: The `PackageManager` selector and its wire names
//! - [`fetch`]: The shared fetch primitive (`Fetcher` trait, reqwest-backed `HttpFetcher`)
//! - [`resolver`]: The `Resolver` trait every registry implements
//! - [`resolvers`]: Concrete resolvers (GitHub Releases, npm, PyPI) and the dispatch table
//! - [`error`]: The error type shared by fetching, parsing and dispatch

pub mod error;
pub mod fetch;
pub mod manager;
pub mod resolver;
pub mod resolvers;
