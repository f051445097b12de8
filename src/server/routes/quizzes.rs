use axum::{extract::State, routing::post, Json, Router};
use rand::seq::SliceRandom;
use rand::thread_rng;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::queries::questions;
use crate::db::Question;
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiResponse};
use crate::telemetry::QUIZ_QUESTION_CNTR;

#[derive(Deserialize)]
struct QuizBody {
    quiz_category: QuizCategory,
    #[serde(default)]
    previous_questions: Vec<i64>,
}

#[derive(Deserialize)]
struct QuizCategory {
    // 0 selects across all categories
    id: i64,
}

#[derive(Serialize)]
struct QuizQuestion {
    success: bool,
    question: Option<Question>,
    #[serde(rename = "previousQuestion")]
    previous_question: Vec<i64>,
}

async fn play_quiz(
    State(pool): State<SqlitePool>,
    Json(body): Json<QuizBody>,
) -> ApiResponse<Json<QuizQuestion>> {
    let candidates = if body.quiz_category.id == 0 {
        questions::get_all_questions(&pool).await
    } else {
        questions::get_questions_for_category(&pool, body.quiz_category.id).await
    }
    .map_err(|_| ApiError::Unprocessable)?;

    // A category with no questions at all cannot start a round.
    if candidates.is_empty() {
        return Err(ApiError::Unprocessable);
    }

    let unseen: Vec<Question> = candidates
        .into_iter()
        .filter(|question| !body.previous_questions.contains(&question.id))
        .collect();

    // Empty remainder means the round is over; a null question tells the
    // client to stop asking.
    let question = unseen.choose(&mut thread_rng()).cloned();

    if let Some(question) = &question {
        let category = question
            .category
            .map_or_else(|| "none".to_owned(), |id| id.to_string());
        QUIZ_QUESTION_CNTR
            .with_label_values(&[category.as_str()])
            .inc();
    }

    Ok(Json(QuizQuestion {
        success: true,
        question,
        previous_question: body.previous_questions,
    }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(play_quiz))
        .with_state(state)
}
