//! Widget routes: one widget per resource, or several side by side on a dashboard.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;

use crate::errors::{ApiResponse, AppError};
use crate::models::course::Course;
use crate::models::query_params::{QueryLinkRenderer, QueryParams};
use crate::models::student::Student;
use crate::services::catalog::{course_columns, student_columns, DEFAULT_ACTIONS};
use crate::services::widget_table::{build_widget, WidgetOptions, WidgetTable};
use crate::AppState;

/// A widget over any of the catalog's element types.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AnyWidget {
    Courses(WidgetTable<Course>),
    Students(WidgetTable<Student>),
}

/// Several independent widgets rendered from the same request parameters.
#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub courses: WidgetTable<Course>,
    pub students: WidgetTable<Student>,
}

/// GET /api/v1/widgets/{resource} — one widget table for `courses` or `students`.
pub async fn show(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    Query(params): Query<QueryParams>,
) -> Result<Json<ApiResponse<AnyWidget>>, AppError> {
    let widget = match resource.as_str() {
        "courses" => AnyWidget::Courses(courses_widget(&state, &params)?),
        "students" => AnyWidget::Students(students_widget(&state, &params)?),
        other => return Err(AppError::NotFound(format!("Widget '{other}'"))),
    };
    Ok(ApiResponse::success(widget))
}

/// GET /api/v1/credits/{credits}/courses — course widget over one credit tier.
pub async fn courses_by_credits(
    State(state): State<AppState>,
    Path(credits): Path<i64>,
    Query(params): Query<QueryParams>,
) -> Result<Json<ApiResponse<WidgetTable<Course>>>, AppError> {
    let tier = state.catalog.courses.scoped(|course| course.credits == credits);
    let options = WidgetOptions::from_config(&state.config).with_actions(DEFAULT_ACTIONS);
    let widget = build_widget(&tier, &params, &course_columns(), &options, &QueryLinkRenderer)?;
    Ok(ApiResponse::success(widget))
}

/// GET /api/v1/dashboard — course and student widgets on one page.
pub async fn dashboard(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<ApiResponse<Dashboard>>, AppError> {
    let dashboard = Dashboard {
        courses: courses_widget(&state, &params)?,
        students: students_widget(&state, &params)?,
    };
    Ok(ApiResponse::success(dashboard))
}

fn courses_widget(
    state: &AppState,
    params: &QueryParams,
) -> Result<WidgetTable<Course>, AppError> {
    let options = WidgetOptions::from_config(&state.config).with_actions(DEFAULT_ACTIONS);
    build_widget(
        &state.catalog.courses,
        params,
        &course_columns(),
        &options,
        &QueryLinkRenderer,
    )
}

fn students_widget(
    state: &AppState,
    params: &QueryParams,
) -> Result<WidgetTable<Student>, AppError> {
    let options = WidgetOptions::from_config(&state.config)
        .with_per_page(5, &state.config)
        .with_actions(DEFAULT_ACTIONS);
    build_widget(
        &state.catalog.students,
        params,
        &student_columns(),
        &options,
        &QueryLinkRenderer,
    )
}
