use backtrace::Backtrace;
use indexmap::IndexMap;

/// Transient state about the crash event being processed.
///
/// Built by the panic hook (or by the embedding application for programmatic
/// reports) and handed read-only to collectors during the dispatch pass.
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    message: Option<String>,
    location: Option<String>,
    thread_name: Option<String>,
    backtrace: Option<Backtrace>,
    error_chain: Vec<String>,
    custom_data: IndexMap<String, String>,
    silent: bool,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Panic payload or top-level error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Panic site as `file:line:column`.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = Some(name.into());
        self
    }

    pub fn with_backtrace(mut self, backtrace: Backtrace) -> Self {
        self.backtrace = Some(backtrace);
        self
    }

    /// Record an error and its source chain. Sets the message from the error's
    /// `Display` output if no message was set yet.
    pub fn with_error(mut self, error: &(dyn std::error::Error + 'static)) -> Self {
        if self.message.is_none() {
            self.message = Some(error.to_string());
        }
        let mut current: Option<&(dyn std::error::Error + 'static)> = Some(error);
        while let Some(err) = current {
            self.error_chain.push(err.to_string());
            current = err.source();
        }
        self
    }

    /// Attach one key/value pair of application-supplied data.
    pub fn with_custom_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_data.insert(key.into(), value.into());
        self
    }

    /// Mark the report as silent. Silent reports are approved for sending
    /// without waiting for an explicit approval step.
    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn thread_name(&self) -> Option<&str> {
        self.thread_name.as_deref()
    }

    pub fn backtrace(&self) -> Option<&Backtrace> {
        self.backtrace.as_ref()
    }

    /// Error messages from outermost to root cause. Empty unless the report
    /// was built from an error value.
    pub fn error_chain(&self) -> &[String] {
        &self.error_chain
    }

    pub fn custom_data(&self) -> &IndexMap<String, String> {
        &self.custom_data
    }

    pub fn is_silent(&self) -> bool {
        self.silent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Outer(Inner);

    #[derive(Debug)]
    struct Inner;

    impl std::fmt::Display for Outer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "outer failed")
        }
    }

    impl std::fmt::Display for Inner {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "inner cause")
        }
    }

    impl std::error::Error for Outer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    impl std::error::Error for Inner {}

    #[test]
    fn test_with_error_captures_chain_and_message() {
        let builder = ReportBuilder::new().with_error(&Outer(Inner));
        assert_eq!(builder.message(), Some("outer failed"));
        assert_eq!(builder.error_chain(), &["outer failed", "inner cause"]);
    }

    #[test]
    fn test_with_error_keeps_existing_message() {
        let builder = ReportBuilder::new()
            .with_message("explicit")
            .with_error(&Outer(Inner));
        assert_eq!(builder.message(), Some("explicit"));
    }

    #[test]
    fn test_custom_data_preserves_insertion_order() {
        let builder = ReportBuilder::new()
            .with_custom_data("b", "2")
            .with_custom_data("a", "1");
        let keys: Vec<&String> = builder.custom_data().keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_default_is_not_silent() {
        assert!(!ReportBuilder::new().is_silent());
        assert!(ReportBuilder::new().silent(true).is_silent());
    }
}
