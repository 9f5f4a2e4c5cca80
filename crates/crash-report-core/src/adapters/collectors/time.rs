use crate::config::CoreConfig;
use crate::entities::{AppContext, CrashReportData, ReportBuilder, ReportField};
use crate::error::BoxError;
use crate::use_cases::ports::FieldCollector;
use chrono::Utc;

/// Collects process start time and crash time, both RFC 3339 in UTC.
pub struct TimeCollector;

impl FieldCollector for TimeCollector {
    fn fields(&self) -> &[ReportField] {
        &[ReportField::AppStartTime, ReportField::CrashTime]
    }

    fn collect_field(
        &self,
        field: ReportField,
        ctx: &AppContext,
        _config: &CoreConfig,
        _builder: &ReportBuilder,
        target: &mut CrashReportData,
    ) -> Result<(), BoxError> {
        match field {
            ReportField::AppStartTime => {
                target.put(field, ctx.start_time().to_rfc3339());
            }
            ReportField::CrashTime => {
                target.put(field, Utc::now().to_rfc3339());
            }
            other => return Err(format!("unexpected field {other}").into()),
        }
        Ok(())
    }
}
