//! JSON handlers for the traffic service.

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::{Serialize, Serializer};

use mockservices_app::ports::{Clock, RandomSource};
use mockservices_domain::traffic::TrafficReport;

use crate::error::ApiError;
use crate::state::TrafficState;

/// Body of `GET /traffic`: reports keyed by route name.
#[derive(Serialize)]
pub struct RoutesBody {
    #[serde(serialize_with = "by_route_name")]
    pub routes: Vec<TrafficReport>,
}

fn by_route_name<S: Serializer>(
    reports: &[TrafficReport],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(reports.iter().map(|report| (&report.route, report)))
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<RoutesBody>),
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
    Ok(Json<TrafficReport>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /traffic`
pub async fn list<R, C>(State(state): State<TrafficState<R, C>>) -> ListResponse
where
    R: RandomSource + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    let routes = state.traffic_service.all_reports();
    ListResponse::Ok(Json(RoutesBody { routes }))
}

/// `GET /traffic/{route}`
pub async fn get<R, C>(
    State(state): State<TrafficState<R, C>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<GetResponse, ApiError>
where
    R: RandomSource + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Path(route) = path?;
    let report = state.traffic_service.route_report(&route)?;
    Ok(GetResponse::Ok(Json(report)))
}
