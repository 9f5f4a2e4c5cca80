use crate::config::CoreConfig;
use crate::entities::{AppContext, CrashReportData, ReportBuilder, ReportField};
use crate::error::BoxError;
use crate::use_cases::ports::FieldCollector;

/// Collects the identity and invocation details of the crashed process.
pub struct AppInfoCollector;

impl FieldCollector for AppInfoCollector {
    fn fields(&self) -> &[ReportField] {
        &[
            ReportField::AppName,
            ReportField::AppVersion,
            ReportField::ExecutablePath,
            ReportField::WorkingDirectory,
            ReportField::CommandLine,
        ]
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
            ReportField::AppName => {
                target.put(field, ctx.app_name());
            }
            ReportField::AppVersion => {
                target.put(field, ctx.app_version());
            }
            ReportField::ExecutablePath => {
                target.put(field, std::env::current_exe()?.display().to_string());
            }
            ReportField::WorkingDirectory => {
                target.put(field, std::env::current_dir()?.display().to_string());
            }
            ReportField::CommandLine => {
                target.put(field, std::env::args().collect::<Vec<_>>().join(" "));
            }
            other => return Err(format!("unexpected field {other}").into()),
        }
        Ok(())
    }
}
