pub mod password;
pub mod use_cases;

pub use use_cases::{
    authenticate::AuthenticateUseCase,
    lookup_by_token::LookupByTokenUseCase,
    register::{RegisterUseCase, TOKEN_LENGTH},
};
