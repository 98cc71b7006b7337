//! Access to the third-party public holiday provider.

mod nager;

pub use nager::*;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{CountryCode, HolidayRecord, Year};

/// Why an upstream lookup did not produce records.
///
/// Independent of the HTTP client so the classification into
/// [`crate::application::AppError`] can be exercised without a network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamFailure {
    #[error("upstream responded with status {0}")]
    Status(u16),

    #[error("upstream request failed: {0}")]
    Transport(String),

    #[error("upstream payload could not be decoded: {0}")]
    Malformed(String),
}

/// A provider of public holidays for one country and year.
///
/// `Ok(None)` means the provider answered successfully but without a body.
/// `Ok(Some(vec![]))` means it answered with an empty list.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    async fn fetch_holidays(
        &self,
        country: &CountryCode,
        year: Year,
    ) -> Result<Option<Vec<HolidayRecord>>, UpstreamFailure>;
}
