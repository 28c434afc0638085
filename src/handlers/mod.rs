pub mod categories;
pub mod questions;
pub mod quizzes;

use crate::TriviaError;

/// Fallback for paths no route matches.
pub async fn not_found() -> TriviaError {
    TriviaError::NotFound(None)
}

/// Fallback for a matched path requested with an unsupported method.
pub async fn method_not_allowed() -> TriviaError {
    TriviaError::MethodNotAllowed
}
