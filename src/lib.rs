//! Transit information kiosk server.
//!
//! One HTTP process serving a desktop "operation time" screen and a tablet
//! "destination selection" screen over a read-only schema of routes, stops,
//! and route-stop orderings. The tablet screen drives two JSON endpoints for
//! the per-route destinations and the ordered station list toward a chosen
//! destination.

pub mod config;
pub mod dal;
pub mod device;
pub mod model;
pub mod web;

pub use web::{AppState, build_router};
