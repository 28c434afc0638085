use crate::db::models::{Category, NewQuestion, Question};
use crate::db::schema::{DEFAULT_CATEGORIES, SQLITE_INIT};
use crate::error::TriviaError;
use sqlx::{Pool, QueryBuilder, Sqlite};
use tracing::{debug, warn};

pub type SqlitePool = Pool<Sqlite>;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Storage handle shared by all handlers. Cloning is cheap (pool is reference counted).
#[derive(Clone)]
pub struct TriviaStorage {
    pool: SqlitePool,
}

impl TriviaStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), TriviaError> {
        // sqlx::query runs a single statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert the standard categories that are not present yet.
    pub async fn seed_categories(&self) -> Result<u64, TriviaError> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;
        for (id, kind) in DEFAULT_CATEGORIES {
            inserted += sqlx::query("INSERT OR IGNORE INTO categories (id, type) VALUES (?, ?)")
                .bind(*id)
                .bind(*kind)
                .execute(&mut *tx)
                .await?
                .rows_affected();
        }
        tx.commit().await?;
        Ok(inserted)
    }

    pub async fn insert_category(&self, id: i64, kind: &str) -> Result<(), TriviaError> {
        sqlx::query("INSERT INTO categories (id, type) VALUES (?, ?)")
            .bind(id)
            .bind(kind)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, TriviaError> {
        let rows = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn find_categories_by_id(&self, id: i64) -> Result<Vec<Category>, TriviaError> {
        let rows = sqlx::query_as::<_, Category>(
            "SELECT id, type FROM categories WHERE id = ? ORDER BY id",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn list_questions(&self) -> Result<Vec<Question>, TriviaError> {
        let rows = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn find_question(&self, id: i64) -> Result<Option<Question>, TriviaError> {
        let row = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Questions whose stored category text equals `category`.
    pub async fn find_questions_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Question>, TriviaError> {
        let rows = sqlx::query_as::<_, Question>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = ? ORDER BY id"
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Case-insensitive substring match on the question text. SQLite `LIKE` only
    /// folds ASCII letters, so accented capitals do not match their lowercase forms.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>, TriviaError> {
        let rows = sqlx::query_as::<_, Question>(&format!(
            r"SELECT {QUESTION_COLUMNS} FROM questions
              WHERE question LIKE ? ESCAPE '\' ORDER BY id"
        ))
        .bind(like_pattern(term))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Quiz candidate pool: optionally restricted to a category, minus excluded ids.
    pub async fn quiz_candidates(
        &self,
        category: Option<&str>,
        exclude: &[i64],
    ) -> Result<Vec<Question>, TriviaError> {
        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE 1 = 1"
        ));
        if let Some(category) = category {
            qb.push(" AND category = ").push_bind(category.to_string());
        }
        if !exclude.is_empty() {
            qb.push(" AND id NOT IN (");
            let mut ids = qb.separated(", ");
            for id in exclude {
                ids.push_bind(*id);
            }
            ids.push_unseparated(")");
        }
        qb.push(" ORDER BY id");

        let rows = qb.build_query_as::<Question>().fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Insert inside a transaction; rolled back if the insert fails. Returns the new id.
    pub async fn insert_question(&self, new: NewQuestion) -> Result<i64, TriviaError> {
        let mut tx = self.pool.begin().await?;
        let inserted = sqlx::query(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)",
        )
        .bind(new.question)
        .bind(new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .execute(&mut *tx)
        .await;

        match inserted {
            Ok(res) => {
                tx.commit().await?;
                let id = res.last_insert_rowid();
                debug!(id, "question inserted");
                Ok(id)
            }
            Err(e) => {
                if let Err(rb) = tx.rollback().await {
                    warn!(error = %rb, "rollback after failed insert also failed");
                }
                Err(e.into())
            }
        }
    }

    /// Returns the number of rows removed (0 or 1).
    pub async fn delete_question(&self, id: i64) -> Result<u64, TriviaError> {
        let res = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected())
    }
}

/// Wrap `term` in `%` wildcards, escaping LIKE metacharacters so they match literally.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
