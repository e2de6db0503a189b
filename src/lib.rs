pub mod app;
pub mod config;
pub mod error;
pub mod routes;

pub use error::RouteError;
pub use routes::{DirectRoutes, Record, RouteTable};
