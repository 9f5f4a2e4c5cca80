use crate::config::CoreConfig;
use crate::entities::{AppContext, CrashReportData, ReportBuilder, ReportField};
use crate::error::BoxError;
use crate::use_cases::ports::FieldCollector;
use backtrace::Backtrace;
use sha2::{Digest, Sha256};

/// Collects the stack trace (or, for reports built from an error value, the
/// error chain) plus a short hash that stays stable across identical crashes.
///
/// The hash covers only frame symbol names, so recompiling with different
/// line numbers does not split one crash into many buckets.
pub struct StackTraceCollector;

impl FieldCollector for StackTraceCollector {
    fn fields(&self) -> &[ReportField] {
        &[ReportField::StackTrace, ReportField::StackTraceHash]
    }

    fn collect_field(
        &self,
        field: ReportField,
        _ctx: &AppContext,
        _config: &CoreConfig,
        builder: &ReportBuilder,
        target: &mut CrashReportData,
    ) -> Result<(), BoxError> {
        match field {
            ReportField::StackTrace => {
                if let Some(trace) = render_trace(builder) {
                    target.put(field, trace);
                }
            }
            ReportField::StackTraceHash => {
                if let Some(hash) = trace_hash(builder) {
                    target.put(field, hash);
                }
            }
            other => return Err(format!("unexpected field {other}").into()),
        }
        Ok(())
    }
}

fn render_trace(builder: &ReportBuilder) -> Option<String> {
    if let Some(backtrace) = builder.backtrace() {
        return Some(format!("{backtrace:?}"));
    }
    render_error_chain(builder)
}

fn render_error_chain(builder: &ReportBuilder) -> Option<String> {
    let chain = builder.error_chain();
    let (head, causes) = chain.split_first()?;
    let mut rendered = head.clone();
    for cause in causes {
        rendered.push_str("\ncaused by: ");
        rendered.push_str(cause);
    }
    Some(rendered)
}

fn trace_hash(builder: &ReportBuilder) -> Option<String> {
    let mut hasher = Sha256::new();
    if let Some(backtrace) = builder.backtrace() {
        for frame in backtrace.frames() {
            for symbol in frame.symbols() {
                if let Some(name) = symbol.name() {
                    hasher.update(name.to_string().as_bytes());
                }
            }
        }
    } else {
        hasher.update(render_error_chain(builder)?.as_bytes());
    }
    Some(hex::encode(&hasher.finalize()[..8]))
}
