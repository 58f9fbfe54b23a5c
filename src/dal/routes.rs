use anyhow::Error;
use sqlx::{Pool, Postgres, query_as};

use crate::model::db_model::RouteDb;

/// Returns the distinct routes that have at least one stop flagged as a
/// terminal, i.e. the routes the tablet screen can offer destinations for.
#[tracing::instrument(err, skip(pool))]
pub async fn get_terminal_routes(pool: &Pool<Postgres>) -> Result<Vec<RouteDb>, Error> {
    let routes: Vec<RouteDb> = query_as(
        "SELECT DISTINCT
        r.id,
        r.route_number,
        r.route_name
        FROM routes r
        JOIN route_stops rs ON rs.route_id = r.id
        WHERE rs.last_stop
        ORDER BY r.route_number",
    )
    .fetch_all(pool)
    .await?;

    Ok(routes)
}
