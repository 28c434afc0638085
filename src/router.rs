use axum::{
    Router,
    http::{HeaderName, Method, header},
    routing::{delete, get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::db::TriviaStorage;
use crate::handlers::{
    categories::{list_categories, questions_by_category},
    method_not_allowed, not_found,
    questions::{create_question, delete_question, list_questions, search_questions},
    quizzes::play_quiz,
};

#[derive(Clone)]
pub struct TriviaState {
    pub storage: TriviaStorage,
}

impl TriviaState {
    pub fn new(storage: TriviaStorage) -> Self {
        Self { storage }
    }
}

/// Any origin; the header and method lists the web client expects.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("true"),
        ])
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
}

pub fn trivia_router(state: TriviaState) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route(
            "/categories/{category_id}/questions",
            get(questions_by_category),
        )
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{question_id}", delete(delete_question))
        .route("/quizzes", post(play_quiz))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
