//! # Credo - Credential Management Service Library
//!
//! This is a facade crate that re-exports all public APIs from the
//! credential service components. Use this crate to get access to the full
//! service in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Credential`, `CredentialError`, `ErrorCode`
//! - **Ports**: `CredentialStore`, `Clock`, `TokenGenerator`
//! - **Use cases**: `RegisterUseCase`, `AuthenticateUseCase`, `LookupByTokenUseCase`
//! - **Adapters**: `PostgresCredentialStore`, `InMemoryCredentialStore`, `Settings`, etc.
//! - **Service**: `CredentialApi` - the assembled HTTP API

/// Core domain types and value objects
pub mod core {
    pub use credo_core::*;
}

// Re-export most commonly used core types at the root level
pub use credo_core::{Credential, CredentialError, ErrorCode};

/// Repository and service trait definitions
pub mod ports {
    pub use credo_core::ports::repositories::CredentialStore;
    pub use credo_core::ports::services::{Clock, TokenGenerator};
}

pub use credo_core::{Clock, CredentialStore, TokenGenerator};

/// Application use cases
pub mod use_cases {
    pub use credo_application::*;
}

pub use credo_application::{
    AuthenticateUseCase, LookupByTokenUseCase, RegisterUseCase, TOKEN_LENGTH,
};

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use credo_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use credo_adapters::persistence::*;
    }

    /// Configuration
    pub mod config {
        pub use credo_adapters::config::*;
    }
}

pub use credo_adapters::{
    InMemoryCredentialStore, PostgresCredentialStore, RandomTokenGenerator, Settings, SystemClock,
};

/// Assembled HTTP service
pub use credo_service::{CredentialApi, configure_postgresql, get_postgres_pool};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the store trait
pub use async_trait::async_trait;

/// Re-export secrecy for passing plaintext passwords into the use cases
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
