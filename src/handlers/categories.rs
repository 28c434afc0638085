use axum::{Json, extract::State};

use crate::db::category_map;
use crate::middleware::ApiPath;
use crate::service::pagination::{PageQuery, paginate};
use crate::types::responses::{CategoriesResponse, CategoryQuestionsResponse};
use crate::{TriviaError, router::TriviaState};

pub const NO_CATEGORY_MATCH: &str = "No questions with category id found.";

/// GET /categories
pub async fn list_categories(
    State(state): State<TriviaState>,
) -> Result<Json<CategoriesResponse>, TriviaError> {
    let categories = state.storage.list_categories().await?;
    if categories.is_empty() {
        return Err(TriviaError::NotFound(None));
    }
    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

/// GET /categories/{id}/questions
///
/// Questions are matched on the stored category text; the category record is
/// looked up by numeric id, so a non-numeric id yields an empty mapping.
pub async fn questions_by_category(
    State(state): State<TriviaState>,
    ApiPath(category_id): ApiPath<String>,
    page: PageQuery,
) -> Result<Json<CategoryQuestionsResponse>, TriviaError> {
    let questions = state.storage.find_questions_by_category(&category_id).await?;
    if questions.is_empty() {
        return Err(TriviaError::bad_request(NO_CATEGORY_MATCH));
    }

    let current = match category_id.trim().parse::<i64>() {
        Ok(id) => state.storage.find_categories_by_id(id).await?,
        Err(_) => Vec::new(),
    };

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: paginate(&questions, page.page()),
        total_questions: questions.len(),
        current_category: category_map(current),
    }))
}
