use crate::errors::AppError;
use crate::models::{ChartResponse, ListQuery, NewProblem, NewProblemForm, Problem, StatsResponse};
use crate::problems::{self, ProblemError};
use crate::state::AppState;
use crate::stats::{build_chart, build_stats};
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, Redirect},
    Form, Json,
};
use chrono::Local;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.problems.lock().await;
    Html(render_index(&today_string(), &build_stats(&data)))
}

pub async fn list_problems(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Problem>> {
    let data = state.problems.lock().await;
    Json(problems::filter_problems(&data, query.difficulty))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let data = state.problems.lock().await;
    Json(build_stats(&data))
}

pub async fn get_chart(State(state): State<AppState>) -> Json<ChartResponse> {
    let data = state.problems.lock().await;
    Json(build_chart(&data))
}

pub async fn create_problem(
    State(state): State<AppState>,
    Json(payload): Json<NewProblem>,
) -> Result<(StatusCode, Json<Problem>), AppError> {
    let problem = apply_add(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(problem)))
}

pub async fn delete_problem(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    apply_delete(&state, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn submit_problem_form(
    State(state): State<AppState>,
    Form(form): Form<NewProblemForm>,
) -> Result<Redirect, AppError> {
    apply_add(&state, form.into()).await?;
    Ok(Redirect::to("/"))
}

pub async fn delete_problem_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    apply_delete(&state, &id).await?;
    Ok(Redirect::to("/"))
}

async fn apply_add(state: &AppState, new: NewProblem) -> Result<Problem, AppError> {
    let mut data = state.problems.lock().await;
    let problem = problems::add_problem(&mut data, new, Local::now().timestamp_millis())?;
    persist_data(&state.data_path, &data).await?;

    info!(id = %problem.id, difficulty = %problem.difficulty, "problem added");
    Ok(problem)
}

async fn apply_delete(state: &AppState, id: &str) -> Result<(), AppError> {
    let mut data = state.problems.lock().await;
    if !problems::delete_problem(&mut data, id) {
        return Err(ProblemError::NotFound(id.to_string()).into());
    }
    persist_data(&state.data_path, &data).await?;

    info!(id, "problem deleted");
    Ok(())
}

fn today_string() -> String {
    Local::now().date_naive().format(problems::DATE_FORMAT).to_string()
}
