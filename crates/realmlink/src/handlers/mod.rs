pub mod authorize;
pub mod callback;
pub mod error;
pub mod health;
pub mod pages;

pub use error::AppError;
