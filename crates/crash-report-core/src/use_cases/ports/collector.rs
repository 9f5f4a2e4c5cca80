use crate::config::CoreConfig;
use crate::entities::{AppContext, CrashReportData, ReportBuilder, ReportField};
use crate::error::{BoxError, CollectorError};

/// Priority class deciding when a collector runs within a report pass.
///
/// Collectors of the same class keep their registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Order {
    First,
    Early,
    Normal,
    Late,
    Last,
}

/// A component that populates zero or more fields of a crash report.
///
/// Most collectors should implement [`FieldCollector`] instead and get this
/// trait for free; implement `Collector` directly only when the per-field
/// dispatch model does not fit.
pub trait Collector: Send + Sync {
    fn order(&self) -> Order {
        Order::Normal
    }

    /// Run one dispatch pass, writing collected values into `target`.
    fn collect(
        &self,
        ctx: &AppContext,
        config: &CoreConfig,
        builder: &ReportBuilder,
        target: &mut CrashReportData,
    ) -> Result<(), CollectorError>;
}

/// Base contract for collectors that own a fixed set of report fields.
///
/// Declares which fields the collector produces and how to collect each one;
/// the dispatch pass itself comes from the blanket [`Collector`] impl, which
/// walks the declared fields in order, gates each through
/// [`should_collect`](FieldCollector::should_collect), and translates the
/// first per-field failure into a [`CollectorError`].
pub trait FieldCollector: Send + Sync {
    /// The fields this collector produces, in collection order.
    fn fields(&self) -> &[ReportField];

    fn order(&self) -> Order {
        Order::Normal
    }

    /// Whether `field` should be collected now.
    ///
    /// The default checks that the field is enabled in the configuration.
    /// Overriding implementations add extra gating (a missing file, a denied
    /// permission) on top of the same membership test.
    fn should_collect(
        &self,
        _ctx: &AppContext,
        config: &CoreConfig,
        field: ReportField,
        _builder: &ReportBuilder,
    ) -> bool {
        config.report_content().contains(&field)
    }

    /// Collect a single field into `target`. May fail with any error; the
    /// dispatch pass wraps it into a [`CollectorError`].
    fn collect_field(
        &self,
        field: ReportField,
        ctx: &AppContext,
        config: &CoreConfig,
        builder: &ReportBuilder,
        target: &mut CrashReportData,
    ) -> Result<(), BoxError>;
}

impl<T: FieldCollector> Collector for T {
    fn order(&self) -> Order {
        FieldCollector::order(self)
    }

    /// Offers every declared field to `should_collect`, collecting those that
    /// pass. A per-field failure is fatal to the rest of this pass: the
    /// failing field is recorded as an explicit `null` and the error is
    /// returned naming it. Fields collected before the failure stay in
    /// `target`; fields after it are never attempted.
    fn collect(
        &self,
        ctx: &AppContext,
        config: &CoreConfig,
        builder: &ReportBuilder,
        target: &mut CrashReportData,
    ) -> Result<(), CollectorError> {
        for &field in self.fields() {
            if self.should_collect(ctx, config, field, builder) {
                if let Err(source) = self.collect_field(field, ctx, config, builder, target) {
                    target.put_null(field);
                    return Err(CollectorError::new(field, source));
                }
            }
        }
        Ok(())
    }
}
