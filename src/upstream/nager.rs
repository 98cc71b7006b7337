use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::domain::{CountryCode, HolidayRecord, Year};

use super::{HolidaySource, UpstreamFailure};

/// Public API of date.nager.at.
pub const DEFAULT_UPSTREAM_URL: &str = "https://date.nager.at/api/v3";

/// Holiday as it appears on the wire. Upstream may leave `date` null.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NagerHoliday {
    date: Option<NaiveDate>,
    local_name: String,
}

/// Decode a response body, skipping holidays without a date.
/// A literal `null` body decodes to `None`.
fn decode_holidays(body: &[u8]) -> Result<Option<Vec<HolidayRecord>>, serde_json::Error> {
    let holidays: Option<Vec<NagerHoliday>> = serde_json::from_slice(body)?;
    Ok(holidays.map(|holidays| {
        holidays
            .into_iter()
            .filter_map(|h| h.date.map(|date| HolidayRecord::new(date, h.local_name)))
            .collect()
    }))
}

/// [`HolidaySource`] backed by the Nager.Date REST API.
#[derive(Debug, Clone)]
pub struct NagerClient {
    http: reqwest::Client,
    base_url: String,
}

impl NagerClient {
    /// Create a client for the API rooted at `base_url`, e.g.
    /// `https://date.nager.at/api/v3`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn holidays_url(&self, country: &CountryCode, year: Year) -> String {
        format!("{}/publicholidays/{}/{}", self.base_url, year, country)
    }
}

impl Default for NagerClient {
    fn default() -> Self {
        Self::new(DEFAULT_UPSTREAM_URL)
    }
}

#[async_trait]
impl HolidaySource for NagerClient {
    async fn fetch_holidays(
        &self,
        country: &CountryCode,
        year: Year,
    ) -> Result<Option<Vec<HolidayRecord>>, UpstreamFailure> {
        let url = self.holidays_url(country, year);
        debug!(%url, "fetching public holidays");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| UpstreamFailure::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamFailure::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| UpstreamFailure::Transport(e.to_string()))?;

        if status == StatusCode::NO_CONTENT || body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let records =
            decode_holidays(&body).map_err(|e| UpstreamFailure::Malformed(e.to_string()))?;
        debug!(
            %country,
            %year,
            count = records.as_ref().map_or(0, Vec::len),
            "received public holidays"
        );
        Ok(records)
    }
}
