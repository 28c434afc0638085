use crate::config::QUESTIONS_PER_PAGE;

/// `?page=N` query. Kept as raw text so a non-numeric value falls back to page 1
/// instead of rejecting the request. Extracted by `middleware::params`.
#[derive(Debug, Default)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(1)
    }
}

/// The 1-indexed `page` window of `items`. Pages outside the result yield an empty vec.
pub fn paginate<T: Clone>(items: &[T], page: i64) -> Vec<T> {
    if page < 1 {
        return Vec::new();
    }
    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
        .unwrap_or(usize::MAX);
    if start >= items.len() {
        return Vec::new();
    }
    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    items[start..end].to_vec()
}
