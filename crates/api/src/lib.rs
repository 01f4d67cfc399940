pub mod error;
pub mod models;
pub mod provider;

// Re-export commonly used types
pub use error::{
    ApiError, ApiResult, DecomposeError, ProviderError, ProviderResult, ValidationError,
};
pub use models::*;
pub use provider::CourseDataProvider;
