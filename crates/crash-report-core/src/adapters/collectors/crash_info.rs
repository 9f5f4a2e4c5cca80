use crate::config::CoreConfig;
use crate::entities::{AppContext, CrashReportData, ReportBuilder, ReportField};
use crate::error::BoxError;
use crate::use_cases::ports::FieldCollector;

/// Collects what is known about the crash site itself: panic message,
/// location and thread. Fields without data are left out of the report.
pub struct CrashInfoCollector;

impl FieldCollector for CrashInfoCollector {
    fn fields(&self) -> &[ReportField] {
        &[
            ReportField::PanicMessage,
            ReportField::PanicLocation,
            ReportField::ThreadName,
        ]
    }

    fn collect_field(
        &self,
        field: ReportField,
        _ctx: &AppContext,
        _config: &CoreConfig,
        builder: &ReportBuilder,
        target: &mut CrashReportData,
    ) -> Result<(), BoxError> {
        let value = match field {
            ReportField::PanicMessage => builder.message(),
            ReportField::PanicLocation => builder.location(),
            ReportField::ThreadName => builder.thread_name(),
            other => return Err(format!("unexpected field {other}").into()),
        };
        if let Some(value) = value {
            target.put(field, value);
        }
        Ok(())
    }
}
