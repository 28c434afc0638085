use axum::{Json, extract::State};
use tracing::debug;

use crate::middleware::RawBody;
use crate::service::quiz::{parse_quiz_body, pick_random};
use crate::types::responses::QuizResponse;
use crate::{TriviaError, router::TriviaState};

/// POST /quizzes -> one random question outside `previous_questions`,
/// restricted to `current_category` when given.
pub async fn play_quiz(
    State(state): State<TriviaState>,
    RawBody(body): RawBody,
) -> Result<Json<QuizResponse>, TriviaError> {
    let req = parse_quiz_body(&body)?;

    let pool = state
        .storage
        .quiz_candidates(req.category_id(), req.excluded_ids())
        .await?;
    debug!(
        category = req.category_id().unwrap_or("<all>"),
        excluded = req.excluded_ids().len(),
        candidates = pool.len(),
        "quiz candidate pool"
    );

    let question = pick_random(pool)?;
    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
