use std::sync::Arc;

use tracing::warn;

use crate::domain::{
    Clock, CountryCode, HolidayRecord, LAST_CELEBRATED_LIMIT, Year,
    common_by_date, count_not_on_weekends, last_celebrated, validate_country_code, validate_year,
};
use crate::upstream::HolidaySource;

use super::{AppError, ErrorKind, classify};

/// Application service answering the holiday queries.
/// This is the primary interface for any client (CLI, HTTP API, tests).
pub struct HolidayService {
    source: Arc<dyn HolidaySource>,
    clock: Arc<dyn Clock>,
}

impl HolidayService {
    /// Create a new service over the given holiday source and clock.
    pub fn new(source: Arc<dyn HolidaySource>, clock: Arc<dyn Clock>) -> Self {
        Self { source, clock }
    }

    // ========================
    // Queries
    // ========================

    /// Up to three holidays of `year` already celebrated before today,
    /// most recent first.
    pub async fn last_celebrated_holidays(
        &self,
        country: &str,
        year: i32,
    ) -> Result<Vec<HolidayRecord>, AppError> {
        let today = self.clock.today();
        let country = validate_country_code(country)?;
        let year = validate_year(year, today)?;

        let records = self.fetch(&country, year).await?.unwrap_or_default();
        if records.is_empty() {
            return Err(AppError::NotFound(
                ErrorKind::NotFound.default_message().to_string(),
            ));
        }

        Ok(last_celebrated(records, today, LAST_CELEBRATED_LIMIT))
    }

    /// Number of `year`'s holidays in `country` falling Monday to Friday.
    pub async fn count_holidays_not_on_weekends(
        &self,
        country: &str,
        year: i32,
    ) -> Result<usize, AppError> {
        let country = validate_country_code(country)?;
        let year = validate_year(year, self.clock.today())?;

        let records = self.fetch(&country, year).await?.unwrap_or_default();
        Ok(count_not_on_weekends(&records))
    }

    /// Non-weekend holiday counts for several countries, largest first.
    /// Fails on the first country that fails.
    pub async fn non_weekend_counts(
        &self,
        year: i32,
        countries: &[String],
    ) -> Result<Vec<usize>, AppError> {
        let mut counts = Vec::with_capacity(countries.len());
        for country in countries {
            counts.push(self.count_holidays_not_on_weekends(country, year).await?);
        }
        counts.sort_unstable_by(|a, b| b.cmp(a));
        Ok(counts)
    }

    /// Holidays of `country1` falling on a date that is also a holiday in
    /// `country2`, matched by date only.
    pub async fn common_holidays(
        &self,
        country1: &str,
        country2: &str,
        year: i32,
    ) -> Result<Vec<HolidayRecord>, AppError> {
        if country1 == country2 {
            return Err(AppError::BadRequest(
                "You cannot compare the same country!".to_string(),
            ));
        }

        let today = self.clock.today();
        let first = validate_country_code(country1)?;
        let second = validate_country_code(country2)?;
        let year = validate_year(year, today)?;

        let holidays1 = self.fetch(&first, year).await?;
        let holidays2 = self.fetch(&second, year).await?;

        match (holidays1, holidays2) {
            (Some(holidays1), Some(holidays2)) => Ok(common_by_date(holidays1, &holidays2)),
            _ => Err(AppError::BadRequest(format!(
                "Holidays list is null for one or both countries: {}, {}",
                country1, country2
            ))),
        }
    }

    // ========================
    // Upstream access
    // ========================

    async fn fetch(
        &self,
        country: &CountryCode,
        year: Year,
    ) -> Result<Option<Vec<HolidayRecord>>, AppError> {
        self.source
            .fetch_holidays(country, year)
            .await
            .map_err(|failure| {
                let err = classify(&failure);
                warn!(%country, %year, %failure, kind = ?err.kind(), "holiday lookup failed");
                err
            })
    }
}
