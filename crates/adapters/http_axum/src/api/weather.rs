//! JSON handlers for the weather service.

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use mockservices_app::ports::RandomSource;
use mockservices_domain::weather::WeatherReport;

use crate::error::ApiError;
use crate::state::WeatherState;

/// Body of `GET /weather`.
#[derive(Serialize)]
pub struct CitiesBody {
    pub cities: Vec<&'static str>,
}

/// Body of `GET /weather/{city}`. `city` echoes the path as sent.
#[derive(Serialize)]
pub struct CityWeatherBody {
    pub city: String,
    pub weather: WeatherReport,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<CitiesBody>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<CityWeatherBody>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /weather`
pub async fn list<R>(State(state): State<WeatherState<R>>) -> ListResponse
where
    R: RandomSource + Send + Sync + 'static,
{
    let cities = state.weather_service.list_cities();
    ListResponse::Ok(Json(CitiesBody { cities }))
}

/// `GET /weather/{city}`
pub async fn get<R>(
    State(state): State<WeatherState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<GetResponse, ApiError>
where
    R: RandomSource + Send + Sync + 'static,
{
    let Path(city) = path?;
    let weather = state.weather_service.city_report(&city)?;
    Ok(GetResponse::Ok(Json(CityWeatherBody { city, weather })))
}
