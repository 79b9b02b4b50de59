pub mod not_found;
pub mod routes;

pub use routes::AppRoutes;
