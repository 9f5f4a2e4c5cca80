//! HTTP Sender for Crash Reports
//!
//! Implements the `ReportSender` port from `crash-report-core` over HTTP:
//! reports are delivered as JSON, either `POST`ed to an endpoint or `PUT` to
//! a per-report URL.
//!
//! # Example
//!
//! ```rust,no_run
//! use crash_report_core::prelude::*;
//! use crash_report_http_sender::HttpSender;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ReporterError> {
//!     let reporter = Arc::new(
//!         CrashReporter::builder()
//!             .app_name("demo")
//!             .app_version("1.0.0")
//!             .sender(
//!                 HttpSender::new("https://crashes.example.com/reports")
//!                     .with_basic_auth("reporter", Some("s3cret".to_string())),
//!             )
//!             .build()?,
//!     );
//!
//!     reporter.startup()?;
//!     Arc::clone(&reporter).install();
//!
//!     // Later, once reports have been approved:
//!     reporter.send_approved().await?;
//!     Ok(())
//! }
//! ```

mod sender;

pub use sender::{HttpMethod, HttpSender};
