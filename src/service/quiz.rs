use crate::db::Question;
use crate::error::TriviaError;
use crate::types::requests::QuizRequest;
use rand::Rng;
use serde_json::Value;

pub const MISSING_QUIZ_DATA: &str = "Please provide quiz data.";
pub const EMPTY_POOL: &str = "No questions left to play.";

/// Parse a raw quiz body. An absent body, `null`, `{}` or any other falsy JSON
/// value counts as missing quiz data.
pub fn parse_quiz_body(body: &[u8]) -> Result<QuizRequest, TriviaError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(TriviaError::bad_request(MISSING_QUIZ_DATA));
    }
    let value: Value = serde_json::from_slice(body).map_err(|_| TriviaError::BadRequest(None))?;
    if is_falsy(&value) {
        return Err(TriviaError::bad_request(MISSING_QUIZ_DATA));
    }
    serde_json::from_value(value).map_err(|_| TriviaError::BadRequest(None))
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Uniform random pick from the candidate pool.
pub fn pick_random(mut pool: Vec<Question>) -> Result<Question, TriviaError> {
    if pool.is_empty() {
        return Err(TriviaError::not_found(EMPTY_POOL));
    }
    let idx = rand::thread_rng().gen_range(0..pool.len());
    Ok(pool.swap_remove(idx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn question(id: i64) -> Question {
        Question {
            id,
            question: format!("q{id}"),
            answer: "a".to_string(),
            category: Some("1".to_string()),
            difficulty: Some(1),
        }
    }

    #[test]
    fn missing_body_is_rejected_with_message() {
        for body in ["", "  ", "null", "{}"] {
            let err = parse_quiz_body(body.as_bytes()).unwrap_err();
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
            assert_eq!(err.message(), MISSING_QUIZ_DATA);
        }
    }

    #[test]
    fn malformed_body_is_a_plain_bad_request() {
        let err = parse_quiz_body(b"{not json").unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "bad request");
    }

    #[test]
    fn body_with_fields_parses() {
        let req = parse_quiz_body(br#"{"previous_questions":[],"current_category":null}"#)
            .expect("should parse");
        assert!(req.excluded_ids().is_empty());
        assert!(req.category_id().is_none());
    }

    #[test]
    fn pick_from_empty_pool_is_not_found() {
        let err = pick_random(Vec::new()).unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), EMPTY_POOL);
    }

    #[test]
    fn pick_returns_a_pool_member() {
        let pool: Vec<Question> = (1..=5).map(question).collect();
        for _ in 0..50 {
            let q = pick_random(pool.clone()).unwrap();
            assert!((1..=5).contains(&q.id));
        }
    }
}
