pub mod cache;
pub mod error;
pub mod health;
pub mod orders;
pub mod static_files;

pub use error::AppError;
