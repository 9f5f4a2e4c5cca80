use crate::adapters::collectors::default_collectors;
use crate::config::CoreConfig;
use crate::entities::{AppContext, CrashReportData, ReportBuilder};
use crate::use_cases::ports::Collector;
use tracing::warn;

/// Runs the registered collectors over a crash event to produce the report
/// data.
///
/// Collectors run sorted by their [`Order`](crate::use_cases::ports::Order)
/// class, registration order within a class. A failing collector aborts only
/// its own field batch: the factory logs the failure and carries on with the
/// remaining collectors, so one broken diagnostic source cannot take the
/// whole report down with it.
pub struct ReportFactory {
    collectors: Vec<Box<dyn Collector>>,
}

impl ReportFactory {
    /// A factory with no collectors registered.
    pub fn new() -> Self {
        Self {
            collectors: Vec::new(),
        }
    }

    /// A factory pre-populated with the default collector set.
    pub fn with_default_collectors() -> Self {
        Self {
            collectors: default_collectors(),
        }
    }

    pub fn with_collector(mut self, collector: impl Collector + 'static) -> Self {
        self.register(Box::new(collector));
        self
    }

    pub fn register(&mut self, collector: Box<dyn Collector>) {
        self.collectors.push(collector);
    }

    pub fn collector_count(&self) -> usize {
        self.collectors.len()
    }

    /// Run one full report pass.
    pub fn create(
        &self,
        ctx: &AppContext,
        config: &CoreConfig,
        builder: &ReportBuilder,
    ) -> CrashReportData {
        let mut target = CrashReportData::new();
        let mut ordered: Vec<&dyn Collector> =
            self.collectors.iter().map(|collector| collector.as_ref()).collect();
        ordered.sort_by_key(|collector| collector.order());

        for collector in ordered {
            if let Err(error) = collector.collect(ctx, config, builder, &mut target) {
                warn!(
                    field = %error.field(),
                    %error,
                    "collector failed, continuing with remaining collectors"
                );
            }
        }
        target
    }
}

impl Default for ReportFactory {
    fn default() -> Self {
        Self::new()
    }
}
