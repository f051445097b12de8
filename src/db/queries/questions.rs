use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

#[derive(Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

pub async fn get_all_questions(pool: &SqlitePool) -> sqlx::Result<Vec<Question>> {
    let query = format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id");
    sqlx::query_as::<_, Question>(&query).fetch_all(pool).await
}

pub async fn get_questions_page(
    pool: &SqlitePool,
    limit: i64,
    offset: i64,
) -> sqlx::Result<Vec<Question>> {
    let query = format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id LIMIT ?1 OFFSET ?2");
    sqlx::query_as::<_, Question>(&query)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
}

pub async fn count_questions(pool: &SqlitePool) -> sqlx::Result<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM questions")
        .fetch_one(pool)
        .await
}

pub async fn get_question(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Question>> {
    let query = format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = ?1");
    sqlx::query_as::<_, Question>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn get_questions_for_category(
    pool: &SqlitePool,
    category: i64,
) -> sqlx::Result<Vec<Question>> {
    let query = format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE category = ?1 ORDER BY id");
    sqlx::query_as::<_, Question>(&query)
        .bind(category)
        .fetch_all(pool)
        .await
}

pub async fn get_questions_for_category_page(
    pool: &SqlitePool,
    category: i64,
    limit: i64,
    offset: i64,
) -> sqlx::Result<Vec<Question>> {
    let query = format!(
        "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = ?1 ORDER BY id LIMIT ?2 OFFSET ?3"
    );
    sqlx::query_as::<_, Question>(&query)
        .bind(category)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
}

pub async fn count_questions_for_category(pool: &SqlitePool, category: i64) -> sqlx::Result<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM questions WHERE category = ?1")
        .bind(category)
        .fetch_one(pool)
        .await
}

/// Case-insensitive substring match on the question text.
/// LIKE is case-insensitive for ASCII in SQLite.
pub async fn search_questions(pool: &SqlitePool, term: &str) -> sqlx::Result<Vec<Question>> {
    let pattern = format!("%{term}%");
    let query = format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE question LIKE ?1 ORDER BY id");
    sqlx::query_as::<_, Question>(&query)
        .bind(pattern)
        .fetch_all(pool)
        .await
}

/// Fields arrive straight from the request body; absent ones insert as NULL
/// and the NOT NULL columns make the statement fail.
pub async fn create_question(
    pool: &SqlitePool,
    question: Option<&str>,
    answer: Option<&str>,
    category: Option<i64>,
    difficulty: Option<i64>,
) -> sqlx::Result<i64> {
    let id = sqlx::query(
        r#"
        INSERT INTO questions (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(question)
    .bind(answer)
    .bind(category)
    .bind(difficulty)
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(id)
}

pub async fn delete_question(pool: &SqlitePool, id: i64) -> sqlx::Result<()> {
    sqlx::query("DELETE FROM questions WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn import_questions(pool: &SqlitePool, questions: Vec<Question>) -> sqlx::Result<()> {
    for question in questions {
        sqlx::query(
            r#"
            INSERT OR REPLACE INTO questions (id, question, answer, category, difficulty)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(question.id)
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .execute(pool)
        .await?;
    }
    Ok(())
}
