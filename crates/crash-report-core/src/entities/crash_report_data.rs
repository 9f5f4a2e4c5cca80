use super::ReportField;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The data of one crash report: an ordered mapping from report field to
/// collected value.
///
/// Collectors write into this structure during a dispatch pass; they never own
/// it. A field that failed to collect is present with an explicit `null` value,
/// which is distinct from a field that was never attempted (absent). Insertion
/// order is preserved and is the order fields appear in the serialized report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CrashReportData {
    values: IndexMap<ReportField, Value>,
}

impl CrashReportData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a collected value for a field. A later `put` for the same field
    /// overwrites the earlier one without changing its position.
    pub fn put(&mut self, field: ReportField, value: impl Into<Value>) {
        self.values.insert(field, value.into());
    }

    /// Record an explicit absence marker for a field that failed to collect.
    pub fn put_null(&mut self, field: ReportField) {
        self.values.insert(field, Value::Null);
    }

    pub fn get(&self, field: ReportField) -> Option<&Value> {
        self.values.get(&field)
    }

    pub fn contains(&self, field: ReportField) -> bool {
        self.values.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fields and values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ReportField, &Value)> {
        self.values.iter().map(|(field, value)| (*field, value))
    }

    /// Serialize to a pretty-printed JSON object keyed by field names.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
