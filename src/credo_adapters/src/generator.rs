use rand::{Rng, distr::Alphanumeric};

use credo_core::TokenGenerator;

/// Token source backed by the thread-local CSPRNG.
///
/// Tokens are alphanumeric, so 128 characters carry far more entropy than
/// the registration flow needs to treat collisions as negligible.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomTokenGenerator;

impl TokenGenerator for RandomTokenGenerator {
    fn generate(&self, len: usize) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }
}
