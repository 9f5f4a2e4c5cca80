use crate::entities::ReportField;
use crate::error::ReporterError;
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Operator-facing configuration of the reporting pipeline.
///
/// Immutable once built. Construct with [`CoreConfig::builder`], or load from
/// TOML with [`CoreConfig::from_toml_str`] / [`CoreConfig::from_toml_file`];
/// both validate before handing the configuration out.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreConfig {
    report_content: Vec<ReportField>,
    report_dir: Option<PathBuf>,
    application_log_file: Option<PathBuf>,
    application_log_file_lines: usize,
    exclude_matching_environment_keys: Vec<String>,
    delete_unapproved_on_start: bool,
    keep_approved_up_to: Option<usize>,
    chain_panic_hook: bool,
    send_in_dev_mode: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            report_content: ReportField::DEFAULT_FIELDS.to_vec(),
            report_dir: None,
            application_log_file: None,
            application_log_file_lines: 100,
            exclude_matching_environment_keys: Vec::new(),
            delete_unapproved_on_start: true,
            keep_approved_up_to: None,
            chain_panic_hook: false,
            send_in_dev_mode: true,
        }
    }
}

impl CoreConfig {
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder::default()
    }

    pub fn from_toml_str(input: &str) -> Result<Self, ReporterError> {
        let config: CoreConfig = toml::from_str(input)
            .map_err(|e| ReporterError::Configuration(format!("invalid config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ReporterError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_toml_str(&input)
    }

    /// Enabled fields, in report output order.
    pub fn report_content(&self) -> &[ReportField] {
        &self.report_content
    }

    pub fn report_dir(&self) -> Option<&Path> {
        self.report_dir.as_deref()
    }

    /// The directory reports live in, falling back to a per-application
    /// location under the system temp directory when none is configured.
    pub fn resolved_report_dir(&self, app_name: &str) -> PathBuf {
        self.report_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(app_name).join("crash-reports"))
    }

    pub fn application_log_file(&self) -> Option<&Path> {
        self.application_log_file.as_deref()
    }

    pub fn application_log_file_lines(&self) -> usize {
        self.application_log_file_lines
    }

    pub fn exclude_matching_environment_keys(&self) -> &[String] {
        &self.exclude_matching_environment_keys
    }

    /// Compiled exclusion patterns for environment variable keys.
    pub fn environment_exclusion_patterns(&self) -> Result<Vec<Regex>, ReporterError> {
        self.exclude_matching_environment_keys
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| {
                    ReporterError::Configuration(format!(
                        "invalid environment exclusion pattern {pattern:?}: {e}"
                    ))
                })
            })
            .collect()
    }

    pub fn delete_unapproved_on_start(&self) -> bool {
        self.delete_unapproved_on_start
    }

    pub fn keep_approved_up_to(&self) -> Option<usize> {
        self.keep_approved_up_to
    }

    pub fn chain_panic_hook(&self) -> bool {
        self.chain_panic_hook
    }

    pub fn send_in_dev_mode(&self) -> bool {
        self.send_in_dev_mode
    }

    /// Check invariants that would otherwise only surface mid-crash.
    pub fn validate(&self) -> Result<(), ReporterError> {
        if self.report_content.is_empty() {
            return Err(ReporterError::Configuration(
                "report_content must enable at least one field".to_string(),
            ));
        }
        if self.application_log_file_lines == 0 {
            return Err(ReporterError::Configuration(
                "application_log_file_lines must be greater than zero".to_string(),
            ));
        }
        self.environment_exclusion_patterns()?;
        Ok(())
    }
}

/// Builder for [`CoreConfig`] with a fluent API.
#[derive(Debug, Clone, Default)]
pub struct CoreConfigBuilder {
    config: CoreConfig,
}

impl CoreConfigBuilder {
    /// Replace the enabled field set. Order controls report output order.
    pub fn report_content(mut self, fields: impl IntoIterator<Item = ReportField>) -> Self {
        self.config.report_content = fields.into_iter().collect();
        self
    }

    pub fn report_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.report_dir = Some(dir.into());
        self
    }

    pub fn application_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.application_log_file = Some(path.into());
        self
    }

    pub fn application_log_file_lines(mut self, lines: usize) -> Self {
        self.config.application_log_file_lines = lines;
        self
    }

    /// Regex patterns; environment variables whose key matches any pattern are
    /// not collected.
    pub fn exclude_matching_environment_keys(
        mut self,
        patterns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.config.exclude_matching_environment_keys =
            patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn delete_unapproved_on_start(mut self, delete: bool) -> Self {
        self.config.delete_unapproved_on_start = delete;
        self
    }

    pub fn keep_approved_up_to(mut self, keep: usize) -> Self {
        self.config.keep_approved_up_to = Some(keep);
        self
    }

    pub fn chain_panic_hook(mut self, chain: bool) -> Self {
        self.config.chain_panic_hook = chain;
        self
    }

    pub fn send_in_dev_mode(mut self, send: bool) -> Self {
        self.config.send_in_dev_mode = send;
        self
    }

    pub fn build(self) -> Result<CoreConfig, ReporterError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
