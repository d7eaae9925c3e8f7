// Authentication: JWT issuance, password hashing, request middleware

pub mod errors;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod password;
pub mod service;

pub use errors::AuthError;
pub use jwt::{extract_bearer_token, JwtService};
pub use middleware::{cors_layer, jwt_auth_middleware};
pub use models::{AuthResponse, Claims, LoginRequest, RegisterRequest, UserInfo, UserSession};
pub use service::AuthService;
