use super::{ReportApi, ReportError};
use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::libs::report::DateRange;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{header, Client, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

const REPORT_URL: &str = "api/attendance/reports/workshift/";

pub struct AttendanceApi {
    client: Client,
    config: AttendanceConfig,
}

impl AttendanceApi {
    pub fn new(api_url: &str) -> Self {
        Self::from_config(&AttendanceConfig {
            api_url: api_url.to_string(),
        })
    }

    pub fn from_config(config: &AttendanceConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    /// The URL a report request for `range` is sent to.
    ///
    /// Query values are percent-encoded; ISO dates pass through unchanged.
    pub fn request_url(&self, range: &DateRange) -> Result<Url, ReportError> {
        let request = self
            .client
            .get(self.report_url())
            .query(&[("start_date", range.start.as_str()), ("end_date", range.end.as_str())])
            .build()?;
        Ok(request.url().clone())
    }

    fn report_url(&self) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), REPORT_URL)
    }
}

impl ReportApi for AttendanceApi {
    async fn fetch_report(&self, range: &DateRange) -> Result<Value, ReportError> {
        let url = self.request_url(range)?;
        tracing::debug!(%url, "requesting workshift report");

        let res = self
            .client
            .get(url)
            .header(header::USER_AGENT, format!("{}/{}", APP_METADATA_NAME, APP_METADATA_VERSION))
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        // The status does not reject the response; whatever JSON comes back is validated downstream.
        let status = res.status();
        if !status.is_success() {
            tracing::warn!(%status, "report endpoint answered with a non-success status");
        }

        let body = res.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AttendanceConfig {
    /// Base URL of the attendance backend, e.g. `https://attendance.example.com`.
    pub api_url: String,
}

impl AttendanceConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "api".to_string(),
            name: "Attendance API".to_string(),
        }
    }

    pub fn init(config: &Option<AttendanceConfig>) -> anyhow::Result<Self> {
        let default = config.clone().map(|c| c.api_url).unwrap_or_default();
        crate::msg_print!(Message::ConfigModuleApi);
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiUrl.to_string())
                .default(default)
                .interact_text()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_joins_base_without_double_slash() {
        let api = AttendanceApi::new("http://localhost:8000/");
        let url = api.request_url(&DateRange::new("2024-01-01", "2024-01-31")).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/attendance/reports/workshift/?start_date=2024-01-01&end_date=2024-01-31"
        );
    }

    #[test]
    fn test_request_url_encodes_query_values() {
        let api = AttendanceApi::new("http://localhost:8000");
        let url = api.request_url(&DateRange::new("2024-01-01&x=1", "2024 01 31")).unwrap();
        assert_eq!(url.query(), Some("start_date=2024-01-01%26x%3D1&end_date=2024+01+31"));
    }
}
