//! Station listing toward a chosen destination

use anyhow::Error;
use itertools::Itertools;
use sqlx::{Pool, Postgres, query_as};

use crate::model::db_model::RouteStationDb;

/// Returns every stop of a route in natural direction of travel,
/// ascending `stop_order`.
#[tracing::instrument(err, skip(pool))]
pub async fn get_route_stations(
    pool: &Pool<Postgres>,
    route_id: i64,
) -> Result<Vec<RouteStationDb>, Error> {
    let stations: Vec<RouteStationDb> = query_as(
        "SELECT
        s.id AS stop_id,
        s.name,
        rs.stop_order
        FROM stops s
        JOIN route_stops rs ON rs.stop_id = s.id
        WHERE rs.route_id = $1
        ORDER BY rs.stop_order",
    )
    .bind(route_id)
    .fetch_all(pool)
    .await?;

    Ok(stations)
}

/// Picks the station names a rider passes before reaching the destination.
///
/// `stations` must be the full route in ascending `stop_order`. When the
/// destination is the route's first stop in natural order the ride runs the
/// other way, so the whole route is returned in descending order. Otherwise
/// only the stops up to and including the destination are returned, ascending.
/// A destination that is not on the route yields an empty list.
pub fn stations_toward_destination(
    stations: &[RouteStationDb],
    destination_stop_id: i64,
) -> Vec<String> {
    let Some(destination) = stations.iter().find(|s| s.stop_id == destination_stop_id) else {
        return vec![];
    };

    let min_order = stations.iter().map(|s| s.stop_order).min();

    if Some(destination.stop_order) == min_order {
        stations.iter().rev().map(|s| s.name.clone()).collect_vec()
    } else {
        stations
            .iter()
            .filter(|s| s.stop_order <= destination.stop_order)
            .map(|s| s.name.clone())
            .collect_vec()
    }
}
