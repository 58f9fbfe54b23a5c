use anyhow::Error;
use sqlx::{Pool, Postgres, query_as};

use crate::model::db_model::DestinationDb;

/// Returns the terminal stops of a route as candidate destinations.
/// An unknown route id yields an empty list, not an error.
#[tracing::instrument(err, skip(pool))]
pub async fn get_destinations_for_route(
    pool: &Pool<Postgres>,
    route_id: i64,
) -> Result<Vec<DestinationDb>, Error> {
    let destinations: Vec<DestinationDb> = query_as(
        "SELECT
        s.id AS stop_id,
        s.name AS destination_name
        FROM stops s
        JOIN route_stops rs ON rs.stop_id = s.id
        WHERE rs.route_id = $1 AND rs.last_stop
        ORDER BY rs.stop_order",
    )
    .bind(route_id)
    .fetch_all(pool)
    .await?;

    Ok(destinations)
}
