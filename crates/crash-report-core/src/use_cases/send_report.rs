use crate::error::ReporterError;
use crate::store::FileReportStore;
use crate::use_cases::ports::{ReportSender, RetryPolicy};
use tracing::{debug, info, warn};

/// What happened during one sending pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistributionOutcome {
    /// Reports delivered and removed from the store.
    pub sent: usize,
    /// Reports kept in the store for a later pass.
    pub retained: usize,
}

/// Offers approved reports to the configured senders, oldest first, one at a
/// time.
///
/// Every sender gets a chance at every report; the retry policy then decides
/// whether a report with failed deliveries is kept or dropped.
pub struct ReportDistributor<'a> {
    senders: &'a [Box<dyn ReportSender>],
    policy: &'a dyn RetryPolicy,
}

impl<'a> ReportDistributor<'a> {
    pub fn new(senders: &'a [Box<dyn ReportSender>], policy: &'a dyn RetryPolicy) -> Self {
        Self { senders, policy }
    }

    pub async fn send_approved(
        &self,
        store: &FileReportStore,
    ) -> Result<DistributionOutcome, ReporterError> {
        let mut outcome = DistributionOutcome::default();
        let approved = store.list_approved()?;
        if self.senders.is_empty() {
            debug!(
                reports = approved.len(),
                "no senders configured, keeping approved reports"
            );
            outcome.retained = approved.len();
            return Ok(outcome);
        }

        for path in approved {
            let report = match store.load(&path) {
                Ok(report) => report,
                Err(error) => {
                    warn!(path = %path.display(), %error, "skipping unreadable report");
                    outcome.retained += 1;
                    continue;
                }
            };

            let mut failures = Vec::new();
            for sender in self.senders {
                match sender.send(&report).await {
                    Ok(()) => debug!(sender = sender.name(), path = %path.display(), "report delivered"),
                    Err(error) => {
                        warn!(sender = sender.name(), path = %path.display(), %error, "sender failed");
                        failures.push(error);
                    }
                }
            }

            if self.policy.should_retry(self.senders.len(), &failures) {
                info!(path = %path.display(), "delivery failed, keeping report for retry");
                outcome.retained += 1;
            } else {
                store.delete(&path)?;
                outcome.sent += 1;
            }
        }
        Ok(outcome)
    }
}
