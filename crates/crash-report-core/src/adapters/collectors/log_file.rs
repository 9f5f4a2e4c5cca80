use crate::config::CoreConfig;
use crate::entities::{AppContext, CrashReportData, ReportBuilder, ReportField};
use crate::error::BoxError;
use crate::use_cases::ports::{FieldCollector, Order};
use std::fs;

/// Collects the tail of the application log file designated in the
/// configuration.
///
/// Narrows `should_collect` further than the default: on top of the field
/// being enabled, a log file path must actually be configured. A configured
/// but unreadable file is a collection failure and surfaces as one.
pub struct ApplicationLogCollector;

impl FieldCollector for ApplicationLogCollector {
    fn fields(&self) -> &[ReportField] {
        &[ReportField::ApplicationLog]
    }

    fn order(&self) -> Order {
        Order::Late
    }

    fn should_collect(
        &self,
        _ctx: &AppContext,
        config: &CoreConfig,
        field: ReportField,
        _builder: &ReportBuilder,
    ) -> bool {
        config.report_content().contains(&field) && config.application_log_file().is_some()
    }

    fn collect_field(
        &self,
        field: ReportField,
        _ctx: &AppContext,
        config: &CoreConfig,
        _builder: &ReportBuilder,
        target: &mut CrashReportData,
    ) -> Result<(), BoxError> {
        let path = config
            .application_log_file()
            .ok_or("no application log file configured")?;
        let content = fs::read_to_string(path)?;
        let lines: Vec<&str> = content.lines().collect();
        let start = lines.len().saturating_sub(config.application_log_file_lines());
        target.put(field, lines[start..].join("\n"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::ports::Collector;
    use std::io::Write;

    fn ctx() -> AppContext {
        AppContext::new("demo", "1.0.0")
    }

    fn config_with_log(path: &std::path::Path, lines: usize) -> CoreConfig {
        let mut content = ReportField::DEFAULT_FIELDS.to_vec();
        content.push(ReportField::ApplicationLog);
        CoreConfig::builder()
            .report_content(content)
            .application_log_file(path)
            .application_log_file_lines(lines)
            .build()
            .unwrap()
    }

    #[test]
    fn test_tails_the_configured_number_of_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for i in 1..=5 {
            writeln!(file, "line {i}").unwrap();
        }

        let config = config_with_log(file.path(), 3);
        let mut target = CrashReportData::new();
        ApplicationLogCollector
            .collect(&ctx(), &config, &ReportBuilder::new(), &mut target)
            .unwrap();

        assert_eq!(
            target.get(ReportField::ApplicationLog).unwrap().as_str(),
            Some("line 3\nline 4\nline 5")
        );
    }

    #[test]
    fn test_short_file_is_collected_whole() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "only line").unwrap();

        let config = config_with_log(file.path(), 100);
        let mut target = CrashReportData::new();
        ApplicationLogCollector
            .collect(&ctx(), &config, &ReportBuilder::new(), &mut target)
            .unwrap();

        assert_eq!(
            target.get(ReportField::ApplicationLog).unwrap().as_str(),
            Some("only line")
        );
    }

    #[test]
    fn test_without_configured_file_nothing_is_attempted() {
        // ApplicationLog is enabled but no path is configured, so the
        // should_collect override suppresses the field without an error.
        let mut content = ReportField::DEFAULT_FIELDS.to_vec();
        content.push(ReportField::ApplicationLog);
        let config = CoreConfig::builder().report_content(content).build().unwrap();

        let mut target = CrashReportData::new();
        let result =
            ApplicationLogCollector.collect(&ctx(), &config, &ReportBuilder::new(), &mut target);

        assert!(result.is_ok());
        assert!(target.is_empty());
    }

    #[test]
    fn test_missing_file_fails_the_field() {
        let config = config_with_log(std::path::Path::new("/nonexistent/demo.log"), 10);
        let mut target = CrashReportData::new();

        let err = ApplicationLogCollector
            .collect(&ctx(), &config, &ReportBuilder::new(), &mut target)
            .unwrap_err();

        assert_eq!(err.field(), ReportField::ApplicationLog);
        assert_eq!(
            target.get(ReportField::ApplicationLog),
            Some(&serde_json::Value::Null)
        );
    }
}
