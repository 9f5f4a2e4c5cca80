//! Simple example demonstrating basic usage of crash-report-core
//!
//! This example shows how to:
//! - Configure and build a `CrashReporter`
//! - File a programmatic report from an error value
//! - Approve pending reports and drive a sending pass with a custom sender

use async_trait::async_trait;
use crash_report_core::prelude::*;
use std::sync::Arc;

/// A sender that prints reports to stdout instead of shipping them anywhere.
struct StdoutSender;

#[async_trait]
impl ReportSender for StdoutSender {
    fn name(&self) -> &str {
        "stdout"
    }

    async fn send(&self, report: &CrashReportData) -> Result<(), SenderError> {
        println!("{}", report.to_json()?);
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), ReporterError> {
    let report_dir = std::env::temp_dir().join("crash-report-example");
    let config = CoreConfig::builder()
        .report_dir(&report_dir)
        .exclude_matching_environment_keys(["(?i).*secret.*", "(?i).*token.*"])
        .build()?;

    let reporter = Arc::new(
        CrashReporter::builder()
            .app_name("simple-example")
            .app_version(env!("CARGO_PKG_VERSION"))
            .config(config)
            .sender(StdoutSender)
            .build()?,
    );

    // Housekeeping for whatever previous runs left behind, then hook panics.
    reporter.startup()?;
    Arc::clone(&reporter).install();

    // File a report programmatically, as an application would for a
    // non-fatal but noteworthy failure.
    let error = std::io::Error::other("cache warm-up failed");
    let path = reporter.report_error(&error)?;
    println!("report written to {}\n", path.display());

    // Silent reports are pre-approved, so a sending pass picks them up.
    let outcome = reporter.send_approved().await?;
    println!(
        "\nsending pass done: {} sent, {} retained",
        outcome.sent, outcome.retained
    );

    Ok(())
}
