use kalima_dictionary::catalog::LoadError;
use kalima_types::{ErrorDescriptor, ErrorKind};

/// Terminal failure for one solve call.
///
/// Every variant is scoped to a single call; callers should treat
/// `DictionaryUnavailable` as "show no results", not a system failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    #[error("dictionary unavailable: {0}")]
    DictionaryUnavailable(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("solver service unavailable")]
    ServiceUnavailable,

    #[error("call cancelled")]
    Cancelled,
}

impl SolveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SolveError::DictionaryUnavailable(_) => ErrorKind::DictionaryUnavailable,
            SolveError::InvalidRequest(_) => ErrorKind::InvalidRequest,
            SolveError::ServiceUnavailable => ErrorKind::ServiceUnavailable,
            SolveError::Cancelled => ErrorKind::Cancelled,
        }
    }
}

impl From<LoadError> for SolveError {
    fn from(err: LoadError) -> Self {
        // Load errors already name the (language, category) they hit
        SolveError::DictionaryUnavailable(err.to_string())
    }
}

impl From<&SolveError> for ErrorDescriptor {
    fn from(err: &SolveError) -> Self {
        ErrorDescriptor {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<ErrorDescriptor> for SolveError {
    fn from(desc: ErrorDescriptor) -> Self {
        match desc.kind {
            ErrorKind::DictionaryUnavailable => SolveError::DictionaryUnavailable(desc.message),
            ErrorKind::InvalidRequest => SolveError::InvalidRequest(desc.message),
            ErrorKind::ServiceUnavailable => SolveError::ServiceUnavailable,
            ErrorKind::Cancelled => SolveError::Cancelled,
        }
    }
}
