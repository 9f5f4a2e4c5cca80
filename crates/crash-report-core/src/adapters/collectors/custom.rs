use crate::config::CoreConfig;
use crate::entities::{AppContext, CrashReportData, ReportBuilder, ReportField};
use crate::error::BoxError;
use crate::use_cases::ports::{FieldCollector, Order};
use serde_json::{Map, Value};

/// Collects the application-supplied key/value data and the silent flag.
pub struct CustomDataCollector;

impl FieldCollector for CustomDataCollector {
    fn fields(&self) -> &[ReportField] {
        &[ReportField::CustomData, ReportField::IsSilent]
    }

    fn order(&self) -> Order {
        Order::Late
    }

    fn collect_field(
        &self,
        field: ReportField,
        _ctx: &AppContext,
        _config: &CoreConfig,
        builder: &ReportBuilder,
        target: &mut CrashReportData,
    ) -> Result<(), BoxError> {
        match field {
            ReportField::CustomData => {
                let mut data = Map::new();
                for (key, value) in builder.custom_data() {
                    data.insert(key.clone(), Value::from(value.clone()));
                }
                target.put(field, Value::Object(data));
            }
            ReportField::IsSilent => {
                target.put(field, builder.is_silent());
            }
            other => return Err(format!("unexpected field {other}").into()),
        }
        Ok(())
    }
}
