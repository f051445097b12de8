use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db::queries::categories::{get_all_categories, get_category};
use crate::db::queries::questions;
use crate::db::Question;
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiResponse};
use crate::server::pagination::PageQuery;

#[derive(Serialize)]
struct CategoryList {
    success: bool,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct CategoryQuestions {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
    current_category: String,
}

async fn list_categories(State(pool): State<SqlitePool>) -> ApiResponse<Json<CategoryList>> {
    let categories = get_all_categories(&pool).await?;

    Ok(Json(CategoryList {
        success: true,
        categories: categories.into_iter().map(|c| (c.id, c.kind)).collect(),
    }))
}

async fn questions_in_category(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Query(page): Query<PageQuery>,
) -> ApiResponse<Json<CategoryQuestions>> {
    let category = get_category(&pool, id).await?.ok_or(ApiError::NotFound)?;

    let (limit, offset) = page.bounds();
    let total_questions = questions::count_questions_for_category(&pool, id).await?;
    // Unlike the full listing, a page past the end comes back empty here.
    let current_page =
        questions::get_questions_for_category_page(&pool, id, limit, offset).await?;

    Ok(Json(CategoryQuestions {
        success: true,
        questions: current_page,
        total_questions,
        current_category: category.kind,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(questions_in_category))
        .with_state(state)
}
