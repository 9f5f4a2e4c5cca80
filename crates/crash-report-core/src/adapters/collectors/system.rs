use crate::config::CoreConfig;
use crate::entities::{AppContext, CrashReportData, ReportBuilder, ReportField};
use crate::error::BoxError;
use crate::use_cases::ports::FieldCollector;
use sysinfo::System;

/// Collects operating system and machine details.
///
/// Values the platform cannot provide are reported as `"unknown"` rather than
/// failing the pass.
pub struct SystemInfoCollector;

impl FieldCollector for SystemInfoCollector {
    fn fields(&self) -> &[ReportField] {
        &[
            ReportField::OsName,
            ReportField::OsVersion,
            ReportField::KernelVersion,
            ReportField::Hostname,
            ReportField::CpuArchitecture,
        ]
    }

    fn collect_field(
        &self,
        field: ReportField,
        _ctx: &AppContext,
        _config: &CoreConfig,
        _builder: &ReportBuilder,
        target: &mut CrashReportData,
    ) -> Result<(), BoxError> {
        match field {
            ReportField::OsName => {
                target.put(field, System::name().unwrap_or_else(unknown));
            }
            ReportField::OsVersion => {
                target.put(field, System::os_version().unwrap_or_else(unknown));
            }
            ReportField::KernelVersion => {
                target.put(field, System::kernel_version().unwrap_or_else(unknown));
            }
            ReportField::Hostname => {
                target.put(field, System::host_name().unwrap_or_else(unknown));
            }
            ReportField::CpuArchitecture => {
                target.put(field, std::env::consts::ARCH);
            }
            other => return Err(format!("unexpected field {other}").into()),
        }
        Ok(())
    }
}

fn unknown() -> String {
    "unknown".to_string()
}
