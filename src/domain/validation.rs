use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use thiserror::Error;

/// ISO 3166-1 alpha-2 codes the upstream provider publishes holidays for.
/// Kept sorted so membership is a binary search.
pub const VALID_COUNTRY_CODES: [&str; 123] = [
    "AD", "AL", "AM", "AR", "AT", "AU", "AX", "BA", "BB", "BE", "BG", "BJ", "BO", "BR", "BS", "BW",
    "BY", "BZ", "CA", "CH", "CL", "CN", "CO", "CR", "CU", "CY", "CZ", "DE", "DK", "DO", "EC", "EE",
    "EG", "ES", "FI", "FO", "FR", "GA", "GB", "GD", "GE", "GG", "GI", "GL", "GM", "GR", "GT", "GU",
    "GY", "HK", "HN", "HR", "HT", "HU", "ID", "IE", "IL", "IM", "IN", "IS", "IT", "JE", "JM", "JP",
    "KZ", "LB", "LI", "LK", "LT", "LU", "LV", "MA", "MC", "MD", "ME", "MG", "MK", "MN", "MO", "MS",
    "MT", "MU", "MV", "MX", "MY", "MZ", "NA", "NE", "NG", "NI", "NL", "NO", "NZ", "PA", "PE", "PG",
    "PH", "PK", "PL", "PR", "PT", "PY", "RO", "RS", "RU", "SG", "SI", "SK", "SM", "SR", "SV", "SY",
    "TH", "TN", "TR", "TT", "UA", "US", "UY", "VA", "VE", "VN", "ZA",
];

pub const MIN_YEAR: i32 = 1000;
pub const MAX_YEAR: i32 = 9999;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "One or both country codes are invalid. Country codes must be composed of two valid characters in capital letters."
    )]
    InvalidCountryCode(String),

    #[error("Invalid year format: {0}")]
    InvalidYear(i32),

    #[error("The year cannot be in the future: {0}")]
    FutureYear(i32),
}

/// A country code known to be on the allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CountryCode(String);

impl CountryCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A four-digit year that is not in the future.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Year(i32);

impl Year {
    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Check `code` against the allow-list. Case-sensitive: "us" is rejected.
pub fn validate_country_code(code: &str) -> Result<CountryCode, ValidationError> {
    if VALID_COUNTRY_CODES.binary_search(&code).is_ok() {
        Ok(CountryCode(code.to_string()))
    } else {
        Err(ValidationError::InvalidCountryCode(code.to_string()))
    }
}

/// Check that `year` has four digits and does not lie after `today`'s year.
pub fn validate_year(year: i32, today: NaiveDate) -> Result<Year, ValidationError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(ValidationError::InvalidYear(year));
    }
    if year > today.year() {
        return Err(ValidationError::FutureYear(year));
    }
    Ok(Year(year))
}
