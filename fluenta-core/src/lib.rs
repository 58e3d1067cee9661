//! # fluenta-core
//!
//! Core library for fluenta - analytics over subjective fluency ratings.
//!
//! This library provides:
//! - Domain types for rating records and the UI selectors that shape a report
//! - A pure aggregation core turning one snapshot of ratings into the
//!   view-model consumed by charts and summary cards
//! - Snapshot decoding and validation at the store boundary
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Architecture
//!
//! Identity, profiles, and rating persistence live in an external backend
//! service; this crate never fetches, paginates, or caches. The client hands
//! over an ordered snapshot of rating rows, [`ingest`] types and validates it
//! once, and [`analytics::generate_report`] recomputes the full
//! [`analytics::FluencyReport`] whenever the snapshot, the window selection,
//! or the reference month changes. No state survives between passes.
//!
//! ## Example
//!
//! ```rust
//! use chrono::Utc;
//! use fluenta_core::analytics::generate_report;
//! use fluenta_core::{AggregationWindow, ReferenceMonth};
//!
//! let records = fluenta_core::ingest::decode_snapshot("[]").expect("valid snapshot");
//! let now = Utc::now();
//! let report = generate_report(
//!     &records,
//!     AggregationWindow::Days30,
//!     ReferenceMonth::current(now),
//!     now,
//! );
//! assert_eq!(report.summary.total_ratings, 0);
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use error::{Error, Result};
pub use types::*;

// Public modules
pub mod analytics;
pub mod config;
pub mod error;
pub mod format;
pub mod ingest;
pub mod logging;
pub mod types;
