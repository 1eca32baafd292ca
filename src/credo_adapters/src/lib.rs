pub mod clock;
pub mod config;
pub mod generator;
pub mod http;
pub mod persistence;

pub use clock::SystemClock;
pub use generator::RandomTokenGenerator;
pub use persistence::{InMemoryCredentialStore, PostgresCredentialStore};
pub use self::config::Settings;
