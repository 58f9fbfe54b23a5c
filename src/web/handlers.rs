//! Request handlers for the kiosk screens and the JSON endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Device-classified landing (desktop view or tablet redirect) |
//! | `GET` | `/destinationSetting` | Tablet screen with the terminal-routes list |
//! | `GET` | `/navigation` | Desktop navigation screen |
//! | `GET` | `/operationTime` | Desktop operation-time screen |
//! | `GET` | `/api/destinations/{routeId}` | Terminal stops of a route |
//! | `GET` | `/api/stations?routeId=&destination=` | Ordered station list |

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::http::header::USER_AGENT;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use crate::dal;
use crate::device::DeviceClass;
use crate::model::api_model::{DestinationApi, RouteApi, StationsApi};
use crate::web::error::KioskError;
use crate::web::state::AppState;
use crate::web::views;

#[derive(Debug, Deserialize)]
pub struct ViewQuery {
    /// Explicit device override, `desktop` or `tablet`.
    pub view: Option<String>,
}

/// Query parameters of `GET /api/stations`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationsQuery {
    pub route_id: i64,
    pub destination: i64,
}

/// `GET /` - desktop clients get the operation-time screen, tablets are sent
/// to the destination-selection screen.
pub async fn index(Query(params): Query<ViewQuery>, headers: HeaderMap) -> Response {
    let user_agent = headers.get(USER_AGENT).and_then(|value| value.to_str().ok());

    match DeviceClass::classify(params.view.as_deref(), user_agent) {
        DeviceClass::Tablet => Redirect::to("/destinationSetting").into_response(),
        DeviceClass::Desktop => views::operation_time().into_response(),
    }
}

/// `GET /destinationSetting` - tablet screen, pre-populated with the routes
/// that have a terminal stop.
pub async fn destination_setting(
    State(state): State<AppState>,
) -> Result<Html<String>, KioskError> {
    let routes: Vec<RouteApi> = dal::get_terminal_routes(&state.pool)
        .await?
        .into_iter()
        .map(RouteApi::from)
        .collect();

    Ok(views::destination_setting(&routes))
}

/// `GET /navigation`
pub async fn navigation() -> Html<String> {
    views::navigation()
}

/// `GET /operationTime`
pub async fn operation_time() -> Html<String> {
    views::operation_time()
}

/// `GET /api/destinations/{routeId}` - terminal stops of the route as
/// candidate destinations. Unknown routes give an empty array.
pub async fn destinations(
    State(state): State<AppState>,
    Path(route_id): Path<i64>,
) -> Result<Json<Vec<DestinationApi>>, KioskError> {
    let destinations: Vec<DestinationApi> =
        dal::get_destinations_for_route(&state.pool, route_id)
            .await?
            .into_iter()
            .map(DestinationApi::from)
            .collect();

    Ok(Json(destinations))
}

/// `GET /api/stations?routeId=&destination=` - the station names a rider
/// passes toward the destination, plus the destination list for the route.
pub async fn stations(
    State(state): State<AppState>,
    Query(query): Query<StationsQuery>,
) -> Result<Json<StationsApi>, KioskError> {
    let route_stations = dal::get_route_stations(&state.pool, query.route_id).await?;

    let stations = dal::stations_toward_destination(&route_stations, query.destination);

    let destinations: Vec<DestinationApi> =
        dal::get_destinations_for_route(&state.pool, query.route_id)
            .await?
            .into_iter()
            .map(DestinationApi::from)
            .collect();

    let count_stations = stations.len();

    Ok(Json(StationsApi {
        stations,
        count_stations,
        destinations,
    }))
}
