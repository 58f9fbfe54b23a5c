use sqlx::prelude::FromRow;

/// A route that has at least one terminal stop.
#[derive(Debug, Clone, FromRow)]
pub struct RouteDb {
    pub id: i64,
    pub route_number: i32,
    pub route_name: String,
}

/// A terminal stop of a route, offered to riders as a destination.
#[derive(Debug, Clone, FromRow)]
pub struct DestinationDb {
    pub stop_id: i64,
    pub destination_name: String,
}

/// One stop on a route in its natural direction of travel.
///
/// `stop_order` is unique and monotonic per route; the schema is owned by an
/// external system and assumed well-formed.
#[derive(Debug, Clone, FromRow)]
pub struct RouteStationDb {
    pub stop_id: i64,
    pub name: String,
    pub stop_order: i32,
}
