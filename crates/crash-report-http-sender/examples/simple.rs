//! Simple example demonstrating basic usage of crash-report-http-sender
//!
//! This example shows how to:
//! - Boot a small in-process endpoint that accepts crash reports
//! - Wire an `HttpSender` into a `CrashReporter`
//! - File a report and drive a sending pass against the endpoint

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use crash_report_core::prelude::*;
use crash_report_http_sender::HttpSender;
use std::sync::Arc;

async fn receive_report(Json(report): Json<serde_json::Value>) -> StatusCode {
    println!(
        "endpoint received report {} from {}",
        report["REPORT_ID"], report["APP_NAME"]
    );
    StatusCode::OK
}

#[tokio::main]
async fn main() -> Result<(), ReporterError> {
    // A stand-in for the real crash collection endpoint.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind receiver");
    let addr = listener.local_addr().expect("no local addr");
    tokio::spawn(async move {
        let router = Router::new().route("/reports", post(receive_report));
        axum::serve(listener, router).await.expect("receiver failed");
    });

    let report_dir = std::env::temp_dir().join("crash-report-http-example");
    let reporter = Arc::new(
        CrashReporter::builder()
            .app_name("http-sender-example")
            .app_version(env!("CARGO_PKG_VERSION"))
            .config(CoreConfig::builder().report_dir(&report_dir).build()?)
            .sender(HttpSender::new(format!("http://{addr}/reports")))
            .build()?,
    );

    reporter.startup()?;
    Arc::clone(&reporter).install();

    // File a silent report and ship it immediately.
    let error = std::io::Error::other("nightly sync failed");
    reporter.report_error(&error)?;

    let outcome = reporter.send_approved().await?;
    println!(
        "sending pass done: {} sent, {} retained",
        outcome.sent, outcome.retained
    );

    Ok(())
}
