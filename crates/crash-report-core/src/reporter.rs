use crate::config::CoreConfig;
use crate::entities::{AppContext, ReportBuilder};
use crate::error::ReporterError;
use crate::store::FileReportStore;
use crate::use_cases::ports::{Collector, DefaultRetryPolicy, ReportSender, RetryPolicy};
use crate::use_cases::{DistributionOutcome, ReportDistributor, ReportFactory};
use backtrace::Backtrace;
use std::panic::PanicHookInfo;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

/// Entry point of the reporting pipeline.
///
/// Owns the configuration, the collector set, the report store and the
/// senders. Install it as a panic hook to capture crashes, or hand it
/// [`ReportBuilder`]s directly for programmatic reports.
///
/// # Example
///
/// ```no_run
/// use crash_report_core::prelude::*;
/// use std::sync::Arc;
///
/// fn main() -> Result<(), ReporterError> {
///     let reporter = Arc::new(
///         CrashReporter::builder()
///             .app_name("demo")
///             .app_version("1.0.0")
///             .build()?,
///     );
///     reporter.startup()?;
///     Arc::clone(&reporter).install();
///     Ok(())
/// }
/// ```
pub struct CrashReporter {
    ctx: AppContext,
    config: CoreConfig,
    factory: ReportFactory,
    store: FileReportStore,
    senders: Vec<Box<dyn ReportSender>>,
    retry_policy: Box<dyn RetryPolicy>,
}

impl CrashReporter {
    pub fn builder() -> CrashReporterBuilder {
        CrashReporterBuilder::default()
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    pub fn store(&self) -> &FileReportStore {
        &self.store
    }

    /// Startup housekeeping: sweep stale pending reports and cap the approved
    /// backlog, as configured.
    pub fn startup(&self) -> Result<(), ReporterError> {
        if self.config.delete_unapproved_on_start() {
            let swept = self.store.sweep_pending_on_start()?;
            if swept > 0 {
                info!(swept, "removed stale pending reports");
            }
        }
        if let Some(keep) = self.config.keep_approved_up_to() {
            let pruned = self.store.prune_approved(keep)?;
            if pruned > 0 {
                info!(pruned, keep, "pruned approved report backlog");
            }
        }
        Ok(())
    }

    /// Replace the panic hook with one that files a crash report.
    ///
    /// Takes an `Arc` because the hook outlives every borrow; clone first if
    /// you need to keep a handle. With `chain_panic_hook` enabled in the
    /// configuration, the previously registered hook still runs after the
    /// report is written.
    pub fn install(self: Arc<Self>) {
        let previous = std::panic::take_hook();
        let chain = self.config.chain_panic_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            self.handle_panic(panic_info);
            if chain {
                previous(panic_info);
            }
        }));
    }

    /// Capture a panic into a report. Errors are logged, never propagated:
    /// a reporting failure must not mask the panic being handled.
    pub fn handle_panic(&self, panic_info: &PanicHookInfo<'_>) {
        let builder = builder_from_panic(panic_info);
        if let Err(err) = self.report(builder) {
            error!(%err, "failed to write crash report for panic");
        }
    }

    /// Run a full dispatch pass for one crash event and persist the result.
    ///
    /// Silent reports go straight to the approved directory; everything else
    /// waits in pending for [`approve_pending`](Self::approve_pending).
    pub fn report(&self, builder: ReportBuilder) -> Result<PathBuf, ReporterError> {
        let data = self.factory.create(&self.ctx, &self.config, &builder);
        let path = if builder.is_silent() {
            self.store.save_approved(&data)?
        } else {
            self.store.save_pending(&data)?
        };
        info!(path = %path.display(), silent = builder.is_silent(), "crash report written");
        Ok(path)
    }

    /// File a silent report from an error value and its source chain.
    pub fn report_error(
        &self,
        error: &(dyn std::error::Error + 'static),
    ) -> Result<PathBuf, ReporterError> {
        self.report(ReportBuilder::new().with_error(error).silent(true))
    }

    /// Promote all pending reports to approved. Returns how many were
    /// promoted. This is the embedding application's consent step.
    pub fn approve_pending(&self) -> Result<usize, ReporterError> {
        self.store.approve_all()
    }

    /// Offer every approved report to the configured senders.
    ///
    /// Respects `send_in_dev_mode`: in debug builds with sending disabled,
    /// reports stay in the store untouched.
    pub async fn send_approved(&self) -> Result<DistributionOutcome, ReporterError> {
        if cfg!(debug_assertions) && !self.config.send_in_dev_mode() {
            info!("sending disabled in dev mode, keeping approved reports");
            return Ok(DistributionOutcome::default());
        }
        ReportDistributor::new(&self.senders, self.retry_policy.as_ref())
            .send_approved(&self.store)
            .await
    }
}

fn builder_from_panic(panic_info: &PanicHookInfo<'_>) -> ReportBuilder {
    let message = panic_info
        .payload()
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| panic_info.payload().downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string());

    let mut builder = ReportBuilder::new()
        .with_message(message)
        .with_backtrace(Backtrace::new());

    if let Some(location) = panic_info.location() {
        builder = builder.with_location(format!(
            "{}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        ));
    }
    if let Some(name) = std::thread::current().name() {
        builder = builder.with_thread_name(name);
    }
    builder
}

/// Builder for [`CrashReporter`] with a fluent API.
///
/// Application name and version are required; everything else has defaults:
/// default configuration, the default collector set, no senders, and the
/// default retry policy.
#[derive(Default)]
pub struct CrashReporterBuilder {
    app_name: Option<String>,
    app_version: Option<String>,
    config: Option<CoreConfig>,
    extra_collectors: Vec<Box<dyn Collector>>,
    senders: Vec<Box<dyn ReportSender>>,
    retry_policy: Option<Box<dyn RetryPolicy>>,
}

impl CrashReporterBuilder {
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    pub fn app_version(mut self, version: impl Into<String>) -> Self {
        self.app_version = Some(version.into());
        self
    }

    pub fn config(mut self, config: CoreConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Register a collector in addition to the default set.
    pub fn collector(mut self, collector: impl Collector + 'static) -> Self {
        self.extra_collectors.push(Box::new(collector));
        self
    }

    pub fn sender(mut self, sender: impl ReportSender + 'static) -> Self {
        self.senders.push(Box::new(sender));
        self
    }

    pub fn retry_policy(mut self, policy: impl RetryPolicy + 'static) -> Self {
        self.retry_policy = Some(Box::new(policy));
        self
    }

    pub fn build(self) -> Result<CrashReporter, ReporterError> {
        let app_name = self.app_name.ok_or_else(|| {
            ReporterError::Configuration("application name must be set".to_string())
        })?;
        let app_version = self.app_version.ok_or_else(|| {
            ReporterError::Configuration("application version must be set".to_string())
        })?;
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let ctx = AppContext::new(app_name, app_version);
        let store = FileReportStore::new(config.resolved_report_dir(ctx.app_name()));

        let mut factory = ReportFactory::with_default_collectors();
        for collector in self.extra_collectors {
            factory.register(collector);
        }

        Ok(CrashReporter {
            ctx,
            config,
            factory,
            store,
            senders: self.senders,
            retry_policy: self
                .retry_policy
                .unwrap_or_else(|| Box::new(DefaultRetryPolicy)),
        })
    }
}
