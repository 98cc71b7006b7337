mod common;

use std::sync::Arc;

use anyhow::Result;
use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::NaiveDate;
use common::{holiday, parse_date, spawn_server};
use holiday_fetcher::application::{ErrorKind, HolidayService};
use holiday_fetcher::domain::{FixedClock, validate_country_code, validate_year};
use holiday_fetcher::upstream::{HolidaySource, NagerClient, UpstreamFailure};
use serde_json::json;

/// Stand-in for date.nager.at, answering differently per country.
async fn fake_public_holidays(Path((year, country)): Path<(i32, String)>) -> Response {
    match country.as_str() {
        "US" => Json(json!([
            {
                "date": format!("{year}-01-02"),
                "localName": "New Year's Day",
                "name": "New Year's Day",
                "countryCode": "US",
                "fixed": false,
                "global": true,
                "counties": null,
                "launchYear": null,
                "types": ["Public"]
            },
            {
                "date": format!("{year}-07-04"),
                "localName": "Independence Day",
                "name": "Independence Day",
                "countryCode": "US",
                "fixed": false,
                "global": true,
                "counties": null,
                "launchYear": null,
                "types": ["Public"]
            }
        ]))
        .into_response(),
        "CA" => Json(json!([
            { "date": format!("{year}-01-02"), "localName": "Jour de l'An" },
            { "date": format!("{year}-07-03"), "localName": "Canada Day" }
        ]))
        .into_response(),
        "NL" => Json(json!([])).into_response(),
        "AT" => Json(json!([
            { "date": null, "localName": "Landesfeiertag" },
            { "date": format!("{year}-10-26"), "localName": "Nationalfeiertag" }
        ]))
        .into_response(),
        "GB" => StatusCode::NOT_FOUND.into_response(),
        "FR" => StatusCode::BAD_REQUEST.into_response(),
        "DE" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        "IT" => StatusCode::NO_CONTENT.into_response(),
        "PT" => Json(json!([{ "date": "04/25/2023", "localName": "Dia da Liberdade" }]))
            .into_response(),
        _ => (StatusCode::OK, "<html>maintenance</html>").into_response(),
    }
}

async fn fake_upstream() -> Result<String> {
    let router = Router::new().route(
        "/api/v3/publicholidays/{year}/{country}",
        get(fake_public_holidays),
    );
    let addr = spawn_server(router).await?;
    Ok(format!("http://{}/api/v3", addr))
}

async fn fetch(
    client: &NagerClient,
    country: &str,
) -> Result<Option<Vec<holiday_fetcher::domain::HolidayRecord>>, UpstreamFailure> {
    let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let country = validate_country_code(country).unwrap();
    let year = validate_year(2023, today).unwrap();
    client.fetch_holidays(&country, year).await
}

#[tokio::test]
async fn test_fetch_decodes_records_in_upstream_order() -> Result<()> {
    let client = NagerClient::new(fake_upstream().await?);

    let records = fetch(&client, "US").await.unwrap().unwrap();
    assert_eq!(
        records,
        vec![
            holiday("2023-01-02", "New Year's Day"),
            holiday("2023-07-04", "Independence Day"),
        ]
    );

    assert_eq!(fetch(&client, "NL").await, Ok(Some(vec![])));
    Ok(())
}

#[tokio::test]
async fn test_fetch_reports_status_failures() -> Result<()> {
    let client = NagerClient::new(fake_upstream().await?);

    assert_eq!(fetch(&client, "GB").await, Err(UpstreamFailure::Status(404)));
    assert_eq!(fetch(&client, "FR").await, Err(UpstreamFailure::Status(400)));
    assert_eq!(fetch(&client, "DE").await, Err(UpstreamFailure::Status(500)));
    Ok(())
}

#[tokio::test]
async fn test_fetch_no_content_is_absent() -> Result<()> {
    let client = NagerClient::new(fake_upstream().await?);
    assert_eq!(fetch(&client, "IT").await, Ok(None));
    Ok(())
}

#[tokio::test]
async fn test_fetch_undecodable_payloads_are_malformed() -> Result<()> {
    let client = NagerClient::new(fake_upstream().await?);

    assert!(matches!(fetch(&client, "PT").await, Err(UpstreamFailure::Malformed(_))));
    assert!(matches!(fetch(&client, "ES").await, Err(UpstreamFailure::Malformed(_))));
    Ok(())
}

#[tokio::test]
async fn test_fetch_unreachable_upstream_is_transport_failure() -> Result<()> {
    // Grab a free port, then release it so nothing is listening there.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let client = NagerClient::new(format!("http://{}/api/v3", addr));
    assert!(matches!(fetch(&client, "US").await, Err(UpstreamFailure::Transport(_))));
    Ok(())
}

#[tokio::test]
async fn test_service_over_real_client() -> Result<()> {
    let client = NagerClient::new(fake_upstream().await?);
    let service = HolidayService::new(
        Arc::new(client),
        Arc::new(FixedClock(parse_date("2024-03-01"))),
    );

    let common = service.common_holidays("US", "CA", 2023).await?;
    assert_eq!(common, vec![holiday("2023-01-02", "New Year's Day")]);

    // 2023-01-02 is a Monday, 2023-07-04 a Tuesday.
    assert_eq!(service.count_holidays_not_on_weekends("US", 2023).await?, 2);

    let err = service.last_celebrated_holidays("GB", 2023).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = service.last_celebrated_holidays("DE", 2023).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownError);

    let err = service.common_holidays("US", "IT", 2023).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadRequest);

    for country in ["PT", "ES"] {
        let err = service.last_celebrated_holidays(country, 2023).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownError, "{country}");
        assert_eq!(err.message(), ErrorKind::UnknownError.default_message(), "{country}");
    }
    Ok(())
}

#[tokio::test]
async fn test_fetch_skips_holidays_without_date() -> Result<()> {
    let client = NagerClient::new(fake_upstream().await?);

    let records = fetch(&client, "AT").await.unwrap().unwrap();
    assert_eq!(records, vec![holiday("2023-10-26", "Nationalfeiertag")]);
    Ok(())
}
