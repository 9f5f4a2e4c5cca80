//! Integration tests for crash-report-core

use async_trait::async_trait;
use crash_report_core::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

struct RecordingSender {
    delivered: Arc<Mutex<Vec<CrashReportData>>>,
}

#[async_trait]
impl ReportSender for RecordingSender {
    fn name(&self) -> &str {
        "recording"
    }

    async fn send(&self, report: &CrashReportData) -> Result<(), SenderError> {
        self.delivered.lock().unwrap().push(report.clone());
        Ok(())
    }
}

struct FlakySender {
    attempts: Arc<AtomicUsize>,
}

#[async_trait]
impl ReportSender for FlakySender {
    fn name(&self) -> &str {
        "flaky"
    }

    async fn send(&self, _report: &CrashReportData) -> Result<(), SenderError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(SenderError::Network("connection reset".to_string()))
    }
}

fn reporter_with_sender(
    dir: &std::path::Path,
    delivered: Arc<Mutex<Vec<CrashReportData>>>,
) -> CrashReporter {
    CrashReporter::builder()
        .app_name("integration-demo")
        .app_version("0.9.0")
        .config(CoreConfig::builder().report_dir(dir).build().unwrap())
        .sender(RecordingSender { delivered })
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_report_approve_send_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let delivered = Arc::new(Mutex::new(Vec::new()));
    let reporter = reporter_with_sender(dir.path(), Arc::clone(&delivered));

    let builder = ReportBuilder::new()
        .with_message("worker panicked")
        .with_location("src/worker.rs:17:9")
        .with_thread_name("worker-3")
        .with_custom_data("release_channel", "nightly");
    reporter.report(builder).unwrap();

    assert_eq!(reporter.approve_pending().unwrap(), 1);
    let outcome = reporter.send_approved().await.unwrap();
    assert_eq!(outcome, DistributionOutcome { sent: 1, retained: 0 });

    let delivered = delivered.lock().unwrap();
    assert_eq!(delivered.len(), 1);
    let report = &delivered[0];
    assert_eq!(
        report.get(ReportField::AppName),
        Some(&serde_json::Value::from("integration-demo"))
    );
    assert_eq!(
        report.get(ReportField::PanicMessage),
        Some(&serde_json::Value::from("worker panicked"))
    );
    assert_eq!(
        report.get(ReportField::PanicLocation),
        Some(&serde_json::Value::from("src/worker.rs:17:9"))
    );
    assert_eq!(
        report.get(ReportField::CustomData),
        Some(&serde_json::json!({"release_channel": "nightly"}))
    );

    // Delivered reports leave the store.
    assert!(reporter.store().list_approved().unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_delivery_keeps_report_for_next_pass() {
    let dir = tempfile::tempdir().unwrap();
    let attempts = Arc::new(AtomicUsize::new(0));
    let reporter = CrashReporter::builder()
        .app_name("integration-demo")
        .app_version("0.9.0")
        .config(CoreConfig::builder().report_dir(dir.path()).build().unwrap())
        .sender(FlakySender {
            attempts: Arc::clone(&attempts),
        })
        .build()
        .unwrap();

    let io_error = std::io::Error::other("background job failed");
    reporter.report_error(&io_error).unwrap();

    let first = reporter.send_approved().await.unwrap();
    assert_eq!(first, DistributionOutcome { sent: 0, retained: 1 });

    let second = reporter.send_approved().await.unwrap();
    assert_eq!(second, DistributionOutcome { sent: 0, retained: 1 });
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

#[test]
fn test_report_content_controls_collected_fields() {
    let dir = tempfile::tempdir().unwrap();
    let config = CoreConfig::builder()
        .report_dir(dir.path())
        .report_content([
            ReportField::ReportId,
            ReportField::AppName,
            ReportField::PanicMessage,
        ])
        .build()
        .unwrap();
    let reporter = CrashReporter::builder()
        .app_name("integration-demo")
        .app_version("0.9.0")
        .config(config)
        .build()
        .unwrap();

    let path = reporter
        .report(ReportBuilder::new().with_message("small report"))
        .unwrap();
    let report = reporter.store().load(&path).unwrap();

    assert_eq!(report.len(), 3);
    assert!(report.contains(ReportField::ReportId));
    assert!(report.contains(ReportField::AppName));
    assert_eq!(
        report.get(ReportField::PanicMessage),
        Some(&serde_json::Value::from("small report"))
    );
    assert!(!report.contains(ReportField::Environment));
    assert!(!report.contains(ReportField::StackTrace));
}

#[test]
fn test_config_loaded_from_toml_drives_the_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let toml = format!(
        r#"
        report_dir = "{}"
        report_content = ["REPORT_ID", "APP_NAME", "IS_SILENT"]
        delete_unapproved_on_start = false
        "#,
        dir.path().display()
    );
    let config = CoreConfig::from_toml_str(&toml).unwrap();
    let reporter = CrashReporter::builder()
        .app_name("integration-demo")
        .app_version("0.9.0")
        .config(config)
        .build()
        .unwrap();

    let path = reporter.report(ReportBuilder::new()).unwrap();
    let report = reporter.store().load(&path).unwrap();
    assert_eq!(report.len(), 3);
    assert_eq!(
        report.get(ReportField::IsSilent),
        Some(&serde_json::Value::from(false))
    );
}
