use crate::config::CoreConfig;
use crate::entities::{AppContext, CrashReportData, ReportBuilder, ReportField};
use crate::error::BoxError;
use crate::use_cases::ports::FieldCollector;
use regex::Regex;
use serde_json::{Map, Value};

/// Collects environment variables, leaving out every key that matches one of
/// the configured exclusion patterns so secrets never end up in a report.
pub struct EnvironmentCollector;

impl FieldCollector for EnvironmentCollector {
    fn fields(&self) -> &[ReportField] {
        &[ReportField::Environment]
    }

    fn collect_field(
        &self,
        field: ReportField,
        _ctx: &AppContext,
        config: &CoreConfig,
        _builder: &ReportBuilder,
        target: &mut CrashReportData,
    ) -> Result<(), BoxError> {
        let patterns: Vec<Regex> = config
            .exclude_matching_environment_keys()
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<Result<_, _>>()?;

        let mut environment = Map::new();
        for (key, value) in std::env::vars() {
            if patterns.iter().any(|pattern| pattern.is_match(&key)) {
                continue;
            }
            environment.insert(key, Value::from(value));
        }
        target.put(field, Value::Object(environment));
        Ok(())
    }
}
