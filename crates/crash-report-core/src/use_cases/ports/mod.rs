mod collector;
mod sender;

pub use collector::{Collector, FieldCollector, Order};
pub use sender::{DefaultRetryPolicy, ReportSender, RetryPolicy};
