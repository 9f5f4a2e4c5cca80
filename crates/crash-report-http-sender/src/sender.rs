use async_trait::async_trait;
use crash_report_core::entities::{CrashReportData, ReportField};
use crash_report_core::error::SenderError;
use crash_report_core::use_cases::ports::ReportSender;
use std::time::Duration;
use tracing::debug;

/// How the report is delivered to the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// `POST` the JSON report to the endpoint URL.
    Post,
    /// `PUT` the JSON report to `<endpoint>/<report id>`. Requires the report
    /// to carry a `REPORT_ID` field.
    Put,
}

/// Delivers crash reports to an HTTP endpoint as JSON.
pub struct HttpSender {
    url: String,
    method: HttpMethod,
    basic_auth: Option<(String, Option<String>)>,
    headers: Vec<(String, String)>,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpSender {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::Post,
            basic_auth: None,
            headers: Vec::new(),
            timeout: Duration::from_secs(10),
            client: reqwest::Client::new(),
        }
    }

    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: Option<String>,
    ) -> Self {
        self.basic_auth = Some((username.into(), password));
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn target_url(&self, report: &CrashReportData) -> Result<String, SenderError> {
        match self.method {
            HttpMethod::Post => Ok(self.url.clone()),
            HttpMethod::Put => {
                let id = report
                    .get(ReportField::ReportId)
                    .and_then(|value| value.as_str())
                    .filter(|id| !id.is_empty())
                    .ok_or_else(|| {
                        SenderError::InvalidReport(
                            "PUT delivery requires a REPORT_ID field".to_string(),
                        )
                    })?;
                Ok(format!("{}/{}", self.url.trim_end_matches('/'), id))
            }
        }
    }
}

#[async_trait]
impl ReportSender for HttpSender {
    fn name(&self) -> &str {
        "http"
    }

    async fn send(&self, report: &CrashReportData) -> Result<(), SenderError> {
        let url = self.target_url(report)?;
        let body = serde_json::to_string(report)?;

        let mut request = match self.method {
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
        }
        .timeout(self.timeout)
        .header("content-type", "application/json")
        .body(body);

        if let Some((username, password)) = &self.basic_auth {
            request = request.basic_auth(username, password.as_deref());
        }
        for (key, value) in &self.headers {
            request = request.header(key.as_str(), value.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|e| SenderError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SenderError::Rejected {
                status: status.as_u16(),
            });
        }
        debug!(%url, status = status.as_u16(), "report delivered");
        Ok(())
    }
}
