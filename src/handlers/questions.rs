use axum::{Json, extract::State};
use tracing::{info, warn};

use crate::db::{NewQuestion, category_map};
use crate::middleware::{ApiPath, JsonBody};
use crate::service::pagination::{PageQuery, paginate};
use crate::types::requests::{CreateQuestionRequest, SearchRequest};
use crate::types::responses::{
    CreateQuestionResponse, DeleteQuestionResponse, QuestionListResponse, SearchResponse,
};
use crate::{TriviaError, router::TriviaState};

pub const BLANK_QUESTION: &str = "Question/ Answer can not be blank";
pub const NO_SEARCH_MATCH: &str = "No questions contains found.";

/// GET /questions?page=N
pub async fn list_questions(
    State(state): State<TriviaState>,
    page: PageQuery,
) -> Result<Json<QuestionListResponse>, TriviaError> {
    let questions = state.storage.list_questions().await?;
    let categories = state.storage.list_categories().await?;
    if questions.is_empty() {
        return Err(TriviaError::NotFound(None));
    }

    Ok(Json(QuestionListResponse {
        success: true,
        questions: paginate(&questions, page.page()),
        total_questions: questions.len(),
        current_category: None,
        categories: category_map(categories),
    }))
}

/// DELETE /questions/{id}
pub async fn delete_question(
    State(state): State<TriviaState>,
    ApiPath(raw_id): ApiPath<String>,
    page: PageQuery,
) -> Result<Json<DeleteQuestionResponse>, TriviaError> {
    let Ok(id) = raw_id.parse::<i64>() else {
        return Err(TriviaError::NotFound(None));
    };

    let unprocessable = |e: TriviaError| {
        warn!(id, error = %e, "failed to delete question");
        TriviaError::Unprocessable(None)
    };

    if state
        .storage
        .find_question(id)
        .await
        .map_err(unprocessable)?
        .is_none()
    {
        return Err(TriviaError::NotFound(None));
    }
    state
        .storage
        .delete_question(id)
        .await
        .map_err(unprocessable)?;
    info!(id, "question deleted");

    let questions = state
        .storage
        .list_questions()
        .await
        .map_err(unprocessable)?;
    Ok(Json(DeleteQuestionResponse {
        success: true,
        deleted: id,
        questions: paginate(&questions, page.page()),
        total_questions: questions.len(),
    }))
}

/// POST /questions
pub async fn create_question(
    State(state): State<TriviaState>,
    page: PageQuery,
    JsonBody(body): JsonBody<CreateQuestionRequest>,
) -> Result<Json<CreateQuestionResponse>, TriviaError> {
    let (Some(question), Some(answer)) = (body.question, body.answer) else {
        return Err(TriviaError::bad_request(BLANK_QUESTION));
    };

    let new = NewQuestion {
        question,
        answer,
        category: body.category,
        difficulty: body.difficulty,
    };
    let bad_request = |e: TriviaError| {
        warn!(error = %e, "failed to create question");
        TriviaError::BadRequest(None)
    };
    let created = state
        .storage
        .insert_question(new)
        .await
        .map_err(bad_request)?;
    info!(id = created, "question created");

    let questions = state
        .storage
        .list_questions()
        .await
        .map_err(bad_request)?;
    Ok(Json(CreateQuestionResponse {
        success: true,
        created,
        questions: paginate(&questions, page.page()),
        total_questions: questions.len(),
    }))
}

/// POST /questions/search
pub async fn search_questions(
    State(state): State<TriviaState>,
    page: PageQuery,
    JsonBody(body): JsonBody<SearchRequest>,
) -> Result<Json<SearchResponse>, TriviaError> {
    let term = body.search_term.unwrap_or_default();
    let matches = state.storage.search_questions(&term).await?;
    if matches.is_empty() {
        return Err(TriviaError::not_found(NO_SEARCH_MATCH));
    }

    let categories = state.storage.list_categories().await?;
    Ok(Json(SearchResponse {
        success: true,
        questions: paginate(&matches, page.page()),
        total_questions: matches.len(),
        current_category: categories,
    }))
}
