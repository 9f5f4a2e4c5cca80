use chrono::{DateTime, Utc};

/// Identity of the embedding application, handed read-only to collectors.
///
/// Carries what the process cannot discover about itself: the name and version
/// the application wants to report under, and the moment the reporter was set
/// up, which stands in for process start time.
#[derive(Debug, Clone)]
pub struct AppContext {
    app_name: String,
    app_version: String,
    start_time: DateTime<Utc>,
}

impl AppContext {
    pub fn new(app_name: impl Into<String>, app_version: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            app_version: app_version.into(),
            start_time: Utc::now(),
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}
