use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::queries::categories::get_all_categories;
use crate::db::queries::questions;
use crate::db::Question;
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiResponse};
use crate::server::pagination::{page_bounds, PageQuery};

#[derive(Deserialize)]
struct NewQuestion {
    question: Option<String>,
    answer: Option<String>,
    category: Option<i64>,
    difficulty: Option<i64>,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
}

#[derive(Serialize)]
struct QuestionList {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct QuestionCreated {
    success: bool,
    created: i64,
    questions: Vec<Question>,
    total_questions: i64,
}

#[derive(Serialize)]
struct QuestionDeleted {
    success: bool,
}

#[derive(Serialize)]
struct SearchResults {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
    current_category: Option<String>,
}

// Listing reports database failures as a client error, not a 500.
async fn list_questions(
    State(pool): State<SqlitePool>,
    Query(page): Query<PageQuery>,
) -> ApiResponse<Json<QuestionList>> {
    let (limit, offset) = page.bounds();
    let total_questions = questions::count_questions(&pool)
        .await
        .map_err(|_| ApiError::BadRequest)?;
    let current_page = questions::get_questions_page(&pool, limit, offset)
        .await
        .map_err(|_| ApiError::BadRequest)?;

    // A page past the end of the collection counts as a missing resource.
    if current_page.is_empty() {
        return Err(ApiError::NotFound);
    }

    let categories = get_all_categories(&pool)
        .await
        .map_err(|_| ApiError::BadRequest)?;

    Ok(Json(QuestionList {
        success: true,
        questions: current_page,
        total_questions,
        categories: categories.into_iter().map(|c| (c.id, c.kind)).collect(),
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    Json(body): Json<NewQuestion>,
) -> ApiResponse<Json<QuestionCreated>> {
    let created = questions::create_question(
        &pool,
        body.question.as_deref(),
        body.answer.as_deref(),
        body.category,
        body.difficulty,
    )
    .await
    .map_err(|_| ApiError::Unprocessable)?;

    let (limit, offset) = page_bounds(1);
    let first_page = questions::get_questions_page(&pool, limit, offset)
        .await
        .map_err(|_| ApiError::Unprocessable)?;
    let total_questions = questions::count_questions(&pool)
        .await
        .map_err(|_| ApiError::Unprocessable)?;

    Ok(Json(QuestionCreated {
        success: true,
        created,
        questions: first_page,
        total_questions,
    }))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> ApiResponse<Json<QuestionDeleted>> {
    // Missing id wins over any later failure.
    let question = questions::get_question(&pool, id)
        .await
        .map_err(|_| ApiError::Unprocessable)?
        .ok_or(ApiError::NotFound)?;

    questions::delete_question(&pool, question.id)
        .await
        .map_err(|_| ApiError::Unprocessable)?;

    Ok(Json(QuestionDeleted { success: true }))
}

async fn search_questions(
    State(pool): State<SqlitePool>,
    Json(body): Json<SearchBody>,
) -> ApiResponse<Json<SearchResults>> {
    let term = match body.search_term.as_deref() {
        Some(term) if !term.is_empty() => term,
        _ => return Err(ApiError::NotFound),
    };

    let matches = questions::search_questions(&pool, term).await?;
    let total_questions = matches.len() as i64;

    Ok(Json(SearchResults {
        success: true,
        questions: matches,
        total_questions,
        current_category: None,
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/{id}", delete(delete_question))
        .route("/questions/search", post(search_questions))
        .with_state(state)
}
