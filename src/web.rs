pub mod error;
pub mod handlers;
pub mod router;
pub mod session;
pub mod state;
pub mod views;

pub use router::build_router;
pub use state::AppState;
