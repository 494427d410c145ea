pub mod generic_error;

pub use generic_error::GenericError;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
