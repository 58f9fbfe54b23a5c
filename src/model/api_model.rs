//! JSON shapes served to the kiosk screens

use serde::Serialize;

use super::db_model::{DestinationDb, RouteDb};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteApi {
    pub route_id: i64,
    pub route_number: i32,
    pub route_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationApi {
    pub stop_id: i64,
    pub destination_name: String,
}

/// Response of `GET /api/stations`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationsApi {
    pub stations: Vec<String>,
    pub count_stations: usize,
    pub destinations: Vec<DestinationApi>,
}

impl From<RouteDb> for RouteApi {
    fn from(route: RouteDb) -> Self {
        RouteApi {
            route_id: route.id,
            route_number: route.route_number,
            route_name: route.route_name,
        }
    }
}

impl From<DestinationDb> for DestinationApi {
    fn from(destination: DestinationDb) -> Self {
        DestinationApi {
            stop_id: destination.stop_id,
            destination_name: destination.destination_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stations_response_uses_camel_case_keys() {
        let response = StationsApi {
            stations: vec!["Sakae".to_string()],
            count_stations: 1,
            destinations: vec![DestinationApi {
                stop_id: 4,
                destination_name: "Nagoya Station".to_string(),
            }],
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["countStations"], 1);
        assert_eq!(json["destinations"][0]["stopId"], 4);
        assert_eq!(json["destinations"][0]["destinationName"], "Nagoya Station");
    }
}
