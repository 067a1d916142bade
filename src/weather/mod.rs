//! Weather orchestration service: CEP → city → temperature.

pub mod climate;
pub mod directory;
pub mod handlers;
pub mod routes;
pub mod types;

pub use climate::ClimateClient;
pub use directory::DirectoryClient;
pub use handlers::WeatherState;
pub use routes::create_router;
pub use types::WeatherReport;
