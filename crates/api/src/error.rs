pub const COURSE_NOT_FOUND: &str = "Course not found";

/// Request parameters that fail the schema constraints of a route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Unknown term: {0}")]
    UnknownTerm(String),
    #[error("{field} must be between {min} and {max} characters, got {actual}")]
    LengthOutOfRange {
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },
    #[error("{field} must be a positive integer, got {value:?}")]
    InvalidPagination { field: &'static str, value: String },
    #[error("limit must not exceed {max}, got {value}")]
    LimitTooLarge { max: u32, value: u32 },
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}

/// A catalog identifier that cannot be split at its reference subject width.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecomposeError {
    #[error("Empty subject reference for catalog id {id:?}")]
    EmptySubject { id: String },
    #[error("Catalog id {id:?} has no code after subject {reference:?}")]
    EmptyCode { id: String, reference: String },
    #[error("Catalog id {id:?} cannot be split at byte {at}")]
    NotCharBoundary { id: String, at: usize },
    #[error("Subject {subject:?} of catalog id {id:?} is not alphabetic")]
    NonAlphabeticSubject { id: String, subject: String },
}

/// Failures reported by a course data provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Malformed payload: {0}")]
    Malformed(String),
    #[error("Provider unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Upstream(#[from] ProviderError),
    #[error("Malformed catalog entry: {0}")]
    MalformedEntry(#[from] DecomposeError),
}

impl ApiError {
    pub fn course_not_found() -> Self {
        ApiError::NotFound(COURSE_NOT_FOUND.to_string())
    }

    /// Upstream and malformed-entry failures are faults of the data source,
    /// not of the caller.
    pub fn is_upstream(&self) -> bool {
        matches!(self, ApiError::Upstream(_) | ApiError::MalformedEntry(_))
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;
