use chrono::{DateTime, Utc};

/// Time source injected into the use cases, so creation timestamps are
/// deterministic under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of opaque bearer tokens.
///
/// Implementations must draw from a cryptographically secure source; the
/// registration flow relies on token entropy instead of re-checking
/// uniqueness against the store.
pub trait TokenGenerator: Send + Sync {
    /// Returns a random string of exactly `len` printable characters.
    fn generate(&self, len: usize) -> String;
}
