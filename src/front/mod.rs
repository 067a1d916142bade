//! Front service: validates the CEP and forwards to the weather service.

pub mod handlers;
pub mod routes;

pub use handlers::FrontState;
pub use routes::create_router;
