pub mod settings;

pub use settings::{DatabaseSettings, HttpSettings, Settings};
