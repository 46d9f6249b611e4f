// Common module - shared types and utilities across all modules

pub mod error;
pub mod helpers;
pub mod id_generator;
pub mod staging;
pub mod state;
pub mod validation;

// Re-export commonly used types for convenience
pub use error::ApiError;
pub use helpers::safe_email_log;
pub use id_generator::generate_raw_id;
pub use staging::StagedUpload;
pub use state::AppState;
pub use validation::{ValidationError, ValidationResult, Validator};
