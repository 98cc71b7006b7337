//! Request handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::{Value, json};

use crate::application::AppError;
use crate::domain::HolidayRecord;

use super::SharedService;

/// Raw query string pairs, in request order.
type QueryPairs = Query<Vec<(String, String)>>;

/// Liveness check.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `GET /holidays/last?country=XX&year=YYYY`
pub async fn last_celebrated(
    State(service): State<SharedService>,
    Query(params): QueryPairs,
) -> Result<Json<Vec<HolidayRecord>>, AppError> {
    let params = Params(params);
    let country = params.required("country")?;
    let year = params.year()?;
    let holidays = service.last_celebrated_holidays(country, year).await?;
    Ok(Json(holidays))
}

/// `GET /holidays/non-weekends?year=YYYY&countries=AA,BB`
pub async fn non_weekends(
    State(service): State<SharedService>,
    Query(params): QueryPairs,
) -> Result<Json<Vec<usize>>, AppError> {
    let params = Params(params);
    let year = params.year()?;
    let countries = params.list("countries")?;
    let counts = service.non_weekend_counts(year, &countries).await?;
    Ok(Json(counts))
}

/// `GET /holidays/common?year=YYYY&country1=AA&country2=BB`
pub async fn common(
    State(service): State<SharedService>,
    Query(params): QueryPairs,
) -> Result<Json<Vec<HolidayRecord>>, AppError> {
    let params = Params(params);
    let year = params.year()?;
    let country1 = params.required("country1")?;
    let country2 = params.required("country2")?;
    let holidays = service.common_holidays(country1, country2, year).await?;
    Ok(Json(holidays))
}

struct Params(Vec<(String, String)>);

impl Params {
    fn first(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn required(&self, name: &str) -> Result<&str, AppError> {
        self.first(name).ok_or_else(|| missing(name))
    }

    fn year(&self) -> Result<i32, AppError> {
        let raw = self.required("year")?;
        raw.trim().parse().map_err(|_| {
            AppError::BadRequest(format!("Invalid value for parameter 'year': {}", raw))
        })
    }

    /// Values of a repeated and/or comma-separated parameter.
    fn list(&self, name: &str) -> Result<Vec<String>, AppError> {
        let values: Vec<String> = self
            .0
            .iter()
            .filter(|(key, _)| key == name)
            .flat_map(|(_, value)| value.split(','))
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect();

        if values.is_empty() {
            return Err(missing(name));
        }
        Ok(values)
    }
}

fn missing(name: &str) -> AppError {
    AppError::BadRequest(format!(
        "Required request parameter '{}' is not present",
        name
    ))
}
