pub mod auth;
pub mod error;
pub mod handlers;
pub mod requests;
pub mod routes;
pub mod state;

pub use auth::AuthContext;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
