pub mod routes;
pub mod stations;
pub mod stops;

pub use routes::*;
pub use stations::*;
pub use stops::*;
