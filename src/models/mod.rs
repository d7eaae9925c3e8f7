// Data models for profiles and generated plans

pub mod plan;
pub mod user;

pub use plan::*;
pub use user::*;
