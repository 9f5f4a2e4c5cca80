use crate::config::CoreConfig;
use crate::entities::{AppContext, CrashReportData, ReportBuilder, ReportField};
use crate::error::BoxError;
use crate::use_cases::ports::{FieldCollector, Order};
use std::fs;
use uuid::Uuid;

const INSTALLATION_ID_FILE: &str = "installation-id";

/// Collects the per-report id and the persistent installation id.
///
/// The installation id is generated once and stored in a file next to the
/// reports, so all reports from one installation can be correlated.
pub struct IdentityCollector;

impl FieldCollector for IdentityCollector {
    fn fields(&self) -> &[ReportField] {
        &[ReportField::ReportId, ReportField::InstallationId]
    }

    fn order(&self) -> Order {
        Order::First
    }

    fn collect_field(
        &self,
        field: ReportField,
        ctx: &AppContext,
        config: &CoreConfig,
        _builder: &ReportBuilder,
        target: &mut CrashReportData,
    ) -> Result<(), BoxError> {
        match field {
            ReportField::ReportId => {
                target.put(field, Uuid::new_v4().to_string());
            }
            ReportField::InstallationId => {
                target.put(field, installation_id(ctx, config)?);
            }
            other => return Err(format!("unexpected field {other}").into()),
        }
        Ok(())
    }
}

fn installation_id(ctx: &AppContext, config: &CoreConfig) -> Result<String, BoxError> {
    let dir = config.resolved_report_dir(ctx.app_name());
    let path = dir.join(INSTALLATION_ID_FILE);
    if let Ok(existing) = fs::read_to_string(&path) {
        let existing = existing.trim();
        if !existing.is_empty() {
            return Ok(existing.to_string());
        }
    }
    fs::create_dir_all(&dir)?;
    let id = Uuid::new_v4().to_string();
    fs::write(&path, &id)?;
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::ports::Collector;

    fn collect(config: &CoreConfig) -> CrashReportData {
        let mut target = CrashReportData::new();
        IdentityCollector
            .collect(
                &AppContext::new("demo", "1.0.0"),
                config,
                &ReportBuilder::new(),
                &mut target,
            )
            .unwrap();
        target
    }

    #[test]
    fn test_report_id_is_a_fresh_uuid() {
        let dir = tempfile::tempdir().unwrap();
        let config = CoreConfig::builder().report_dir(dir.path()).build().unwrap();

        let first = collect(&config);
        let second = collect(&config);

        let id = first.get(ReportField::ReportId).unwrap().as_str().unwrap();
        assert!(Uuid::parse_str(id).is_ok());
        assert_ne!(
            first.get(ReportField::ReportId),
            second.get(ReportField::ReportId)
        );
    }

    #[test]
    fn test_installation_id_is_stable_across_reports() {
        let dir = tempfile::tempdir().unwrap();
        let config = CoreConfig::builder().report_dir(dir.path()).build().unwrap();

        let first = collect(&config);
        let second = collect(&config);

        assert_eq!(
            first.get(ReportField::InstallationId),
            second.get(ReportField::InstallationId)
        );
        assert!(dir.path().join(INSTALLATION_ID_FILE).exists());
    }
}
