use serde::{Deserialize, Deserializer};

/// JSON scalars that clients send interchangeably for ids (`3` or `"3"`).
#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrInt {
    Int(i64),
    Text(String),
}

fn text_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<TextOrInt>::deserialize(deserializer)?.map(|v| match v {
        TextOrInt::Int(n) => n.to_string(),
        TextOrInt::Text(s) => s,
    }))
}

fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<TextOrInt>::deserialize(deserializer)? {
        None => Ok(None),
        Some(TextOrInt::Int(n)) => Ok(Some(n)),
        Some(TextOrInt::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(TextOrInt::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid integer: {s}"))),
    }
}

/// POST /questions
#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "text_id")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub difficulty: Option<i64>,
}

/// POST /questions/search
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuizCategory {
    #[serde(default, deserialize_with = "text_id")]
    pub id: Option<String>,
}

/// POST /quizzes
#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
    #[serde(default)]
    pub current_category: Option<QuizCategory>,
}

impl QuizRequest {
    /// Category filter for the candidate pool, if one was chosen.
    pub fn category_id(&self) -> Option<&str> {
        self.current_category.as_ref()?.id.as_deref()
    }

    pub fn excluded_ids(&self) -> &[i64] {
        self.previous_questions.as_deref().unwrap_or_default()
    }
}
