pub mod cli;
pub mod config;
pub mod errors;
pub mod prompt;
pub mod stack;
pub mod utils;

pub use errors::KekiError;
