pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    credential::Credential,
    error::{CredentialError, ErrorCode},
};

pub use ports::{
    repositories::CredentialStore,
    services::{Clock, TokenGenerator},
};
