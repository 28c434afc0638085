use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
    pub difficulty: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// A question that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
    pub difficulty: Option<i64>,
}

/// Category id to type, serialized as a JSON object in ascending id order.
pub type CategoryMap = BTreeMap<i64, String>;

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_kind_as_type() {
        let cat = Category {
            id: 2,
            kind: "Art".to_string(),
        };
        let v = serde_json::to_value(&cat).unwrap();
        assert_eq!(v, serde_json::json!({"id": 2, "type": "Art"}));
    }

    #[test]
    fn category_map_keys_are_ordered() {
        let map = category_map(vec![
            Category {
                id: 10,
                kind: "Sports".to_string(),
            },
            Category {
                id: 2,
                kind: "Art".to_string(),
            },
        ]);
        let s = serde_json::to_string(&map).unwrap();
        assert_eq!(s, r#"{"2":"Art","10":"Sports"}"#);
    }
}
