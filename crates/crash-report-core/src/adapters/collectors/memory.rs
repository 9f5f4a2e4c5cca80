use crate::config::CoreConfig;
use crate::entities::{AppContext, CrashReportData, ReportBuilder, ReportField};
use crate::error::BoxError;
use crate::use_cases::ports::FieldCollector;
use sysinfo::System;

/// Collects physical memory totals in bytes at crash time.
pub struct MemoryCollector;

impl FieldCollector for MemoryCollector {
    fn fields(&self) -> &[ReportField] {
        &[ReportField::TotalMemory, ReportField::AvailableMemory]
    }

    fn collect_field(
        &self,
        field: ReportField,
        _ctx: &AppContext,
        _config: &CoreConfig,
        _builder: &ReportBuilder,
        target: &mut CrashReportData,
    ) -> Result<(), BoxError> {
        let mut system = System::new();
        system.refresh_memory();
        match field {
            ReportField::TotalMemory => {
                target.put(field, system.total_memory());
            }
            ReportField::AvailableMemory => {
                target.put(field, system.available_memory());
            }
            other => return Err(format!("unexpected field {other}").into()),
        }
        Ok(())
    }
}
