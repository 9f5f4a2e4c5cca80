use crate::entities::CrashReportData;
use crate::error::SenderError;
use async_trait::async_trait;

/// Trait for report delivery backends.
#[async_trait]
pub trait ReportSender: Send + Sync {
    /// Short backend name used in logs.
    fn name(&self) -> &str;

    /// Deliver one report. Failures are collected by the distributor and fed
    /// to the retry policy; they never abort the whole sending pass.
    async fn send(&self, report: &CrashReportData) -> Result<(), SenderError>;
}

/// Decides whether a report that failed to send is kept for a later pass.
pub trait RetryPolicy: Send + Sync {
    /// `sender_count` is the number of senders the report was offered to,
    /// `failures` the errors from those that failed.
    fn should_retry(&self, sender_count: usize, failures: &[SenderError]) -> bool;
}

/// Keep a report only when every sender failed; one successful delivery is
/// enough to consider it delivered.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRetryPolicy;

impl RetryPolicy for DefaultRetryPolicy {
    fn should_retry(&self, sender_count: usize, failures: &[SenderError]) -> bool {
        sender_count > 0 && failures.len() >= sender_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_retries_when_all_senders_failed() {
        let policy = DefaultRetryPolicy;
        let failures = vec![SenderError::Network("unreachable".to_string())];
        assert!(policy.should_retry(1, &failures));
    }

    #[test]
    fn test_default_policy_drops_report_after_partial_success() {
        let policy = DefaultRetryPolicy;
        let failures = vec![SenderError::Rejected { status: 503 }];
        assert!(!policy.should_retry(2, &failures));
    }

    #[test]
    fn test_default_policy_without_senders_never_retries() {
        let policy = DefaultRetryPolicy;
        assert!(!policy.should_retry(0, &[]));
    }
}
