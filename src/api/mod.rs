mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

pub use extract::{ApiJson, ApiPath};
pub use routes::create_router;
pub use state::AppState;
