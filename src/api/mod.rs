mod handlers;
mod routes;
mod state;

pub use handlers::{RecommendationsRequest, RecommendationsResponse, TablesResponse};
pub use routes::create_router;
pub use state::{AppState, TableSnapshot};
