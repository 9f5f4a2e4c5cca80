//! Crash Report Core
//!
//! A crash-reporting pipeline for Rust applications: pluggable collectors
//! gather diagnostic fields into a report, reports persist on disk until
//! approved, and senders deliver them to wherever they are triaged.
//!
//! # Example
//!
//! ```no_run
//! use crash_report_core::prelude::*;
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), ReporterError> {
//!     let config = CoreConfig::builder()
//!         .report_dir("/var/lib/demo/crash-reports")
//!         .exclude_matching_environment_keys(["(?i).*secret.*", "(?i).*token.*"])
//!         .build()?;
//!
//!     let reporter = Arc::new(
//!         CrashReporter::builder()
//!             .app_name("demo")
//!             .app_version(env!("CARGO_PKG_VERSION"))
//!             .config(config)
//!             .build()?,
//!     );
//!
//!     // Housekeeping for reports left over from previous runs, then hook
//!     // panics so future crashes are captured.
//!     reporter.startup()?;
//!     Arc::clone(&reporter).install();
//!
//!     Ok(())
//! }
//! ```
//!
//! # Collectors
//!
//! Each collector owns a fixed set of [`ReportField`]s and is asked, field by
//! field, whether and how to collect. Implement
//! [`FieldCollector`](use_cases::ports::FieldCollector) to add a diagnostic
//! source of your own; the dispatch pass, configuration gating, and failure
//! handling come with the trait.
//!
//! A field that fails to collect aborts the rest of that collector's batch and
//! leaves an explicit `null` in the report; other collectors still run, so one
//! broken source costs its own fields and nothing else.

pub mod adapters;
pub mod config;
pub mod entities;
pub mod error;
mod reporter;
mod store;
pub mod use_cases;

pub use reporter::{CrashReporter, CrashReporterBuilder};
pub use store::FileReportStore;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::collectors::default_collectors;
    pub use crate::config::{CoreConfig, CoreConfigBuilder};
    pub use crate::entities::{AppContext, CrashReportData, ReportBuilder, ReportField};
    pub use crate::error::{CollectorError, ReporterError, SenderError};
    pub use crate::use_cases::ports::{
        Collector, DefaultRetryPolicy, FieldCollector, Order, ReportSender, RetryPolicy,
    };
    pub use crate::use_cases::{DistributionOutcome, ReportDistributor, ReportFactory};
    pub use crate::{CrashReporter, CrashReporterBuilder, FileReportStore};
}
