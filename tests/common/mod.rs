// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use holiday_fetcher::application::HolidayService;
use holiday_fetcher::domain::{CountryCode, FixedClock, HolidayRecord, Year};
use holiday_fetcher::upstream::{HolidaySource, UpstreamFailure};

type Outcome = Result<Option<Vec<HolidayRecord>>, UpstreamFailure>;

/// In-memory holiday source. Unknown (country, year) pairs answer 404.
#[derive(Default)]
pub struct StubSource {
    responses: HashMap<(String, i32), Outcome>,
    calls: AtomicUsize,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_holidays(mut self, country: &str, year: i32, holidays: Vec<HolidayRecord>) -> Self {
        self.responses
            .insert((country.to_string(), year), Ok(Some(holidays)));
        self
    }

    /// Upstream answers without a body.
    pub fn with_absent(mut self, country: &str, year: i32) -> Self {
        self.responses.insert((country.to_string(), year), Ok(None));
        self
    }

    pub fn with_failure(mut self, country: &str, year: i32, failure: UpstreamFailure) -> Self {
        self.responses
            .insert((country.to_string(), year), Err(failure));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HolidaySource for StubSource {
    async fn fetch_holidays(&self, country: &CountryCode, year: Year) -> Outcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .get(&(country.as_str().to_string(), year.value()))
            .cloned()
            .unwrap_or(Err(UpstreamFailure::Status(404)))
    }
}

/// Helper to parse a date string into NaiveDate
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

pub fn holiday(date: &str, name: &str) -> HolidayRecord {
    HolidayRecord::new(parse_date(date), name)
}

/// Helper to create a service over `source` whose "today" is `today`
pub fn test_service(source: Arc<StubSource>, today: &str) -> HolidayService {
    HolidayService::new(source, Arc::new(FixedClock(parse_date(today))))
}

/// Test fixture: a few countries' 2023 holidays
pub struct StandardHolidays;

impl StandardHolidays {
    pub fn us_2023() -> Vec<HolidayRecord> {
        vec![
            holiday("2023-01-02", "New Year's Day"),
            holiday("2023-01-16", "Martin Luther King, Jr. Day"),
            holiday("2023-05-29", "Memorial Day"),
            holiday("2023-06-19", "Juneteenth"),
            holiday("2023-07-04", "Independence Day"),
            holiday("2023-09-04", "Labor Day"),
            holiday("2023-11-11", "Veterans Day"),
            holiday("2023-11-23", "Thanksgiving Day"),
            holiday("2023-12-25", "Christmas Day"),
        ]
    }

    pub fn gb_2023() -> Vec<HolidayRecord> {
        vec![
            holiday("2023-01-02", "New Year's Day"),
            holiday("2023-04-07", "Good Friday"),
            holiday("2023-04-10", "Easter Monday"),
            holiday("2023-05-01", "Early May Bank Holiday"),
            holiday("2023-05-08", "Coronation Bank Holiday"),
            holiday("2023-05-29", "Spring Bank Holiday"),
            holiday("2023-08-28", "Summer Bank Holiday"),
            holiday("2023-12-25", "Christmas Day"),
            holiday("2023-12-26", "Boxing Day"),
        ]
    }

    pub fn source() -> StubSource {
        StubSource::new()
            .with_holidays("US", 2023, Self::us_2023())
            .with_holidays("GB", 2023, Self::gb_2023())
    }
}

/// Serve `router` on an ephemeral local port and return its address
pub async fn spawn_server(router: axum::Router) -> anyhow::Result<std::net::SocketAddr> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    Ok(addr)
}
