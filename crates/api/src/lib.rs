//! opentld HTTP API — the DoH endpoint and its error mapping.
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_routes;
pub use state::AppState;
