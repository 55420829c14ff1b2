pub mod app;
pub mod routes;

pub use app::{api_router, build_app};
