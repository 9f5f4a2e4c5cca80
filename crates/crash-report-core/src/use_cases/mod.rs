mod create_report;
pub mod ports;
mod send_report;

pub use create_report::ReportFactory;
pub use send_report::{DistributionOutcome, ReportDistributor};
