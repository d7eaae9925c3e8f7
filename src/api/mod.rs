// API routes and handlers

pub mod auth;
pub mod health;
pub mod plans;
pub mod routes;

pub use routes::create_routes;
