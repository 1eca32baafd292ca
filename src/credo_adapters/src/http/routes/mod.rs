pub mod authenticate;
pub mod error;
pub mod lookup_by_token;
pub mod register;
pub mod response;

pub use authenticate::{AuthRequest, authenticate};
pub use error::{ApiError, ErrorResponse, not_found};
pub use lookup_by_token::lookup_by_token;
pub use register::{RegisterRequest, register};
pub use response::CredentialResponse;
