// HTTP surface of the storefront: pages, page data, health

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

pub use errors::AppError;
pub use server::StorefrontServer;
pub use state::AppState;
