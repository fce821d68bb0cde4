use crate::actions;
use crate::calendar::{build_month, MonthCursor, MonthGrid};
use crate::day::CheckDay;
use crate::errors::{AppError, ClientError, Invalid};
use crate::models::{
    DashboardQuery, Habit, LoginForm, MonthQuery, NewHabitForm, NoticeQuery, RegisterForm,
    StatsResponse, ToggleForm,
};
use crate::session::Session;
use crate::state::AppState;
use crate::stats::build_stats;
use crate::ui::{render_dashboard, render_landing, render_not_found, DashboardBody, Notice, Tab};
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{info, warn};

pub async fn index(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<NoticeQuery>,
) -> Response {
    if Session::from_headers(&headers).is_some() {
        return Redirect::to("/dashboard").into_response();
    }
    let notice = Notice::from_query(query.notice.as_deref(), query.kind.as_deref());
    Html(render_landing(notice.as_ref(), state.config.locale)).into_response()
}

pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    let locale = state.config.locale;
    let email = form.email.trim();
    if email.is_empty() || form.password.is_empty() {
        let message = Invalid::MissingCredentials.message(locale);
        return redirect_with_notice("/", &Notice::error(message));
    }

    match state.client.login(email, &form.password).await {
        Ok(session) => {
            info!(user = %session.user_id, "logged in");
            let notice = Notice::ok(locale.texts().logged_in);
            let url = format!("/dashboard?{}", notice.to_query());
            redirect_with_cookies(&url, session.set_cookie_headers())
        }
        Err(err) => redirect_with_notice("/", &Notice::error(err.user_message(locale))),
    }
}

pub async fn register(State(state): State<AppState>, Form(form): Form<RegisterForm>) -> Response {
    let locale = state.config.locale;
    let email = form.email.trim();
    if let Err(invalid) = validate_registration(email, &form.password, &form.confirm_password) {
        return redirect_with_notice("/", &Notice::error(invalid.message(locale)));
    }

    match state.client.register(email, &form.password).await {
        Ok(()) => {
            info!("account registered");
            redirect_with_notice("/", &Notice::ok(locale.texts().account_created))
        }
        Err(err) => redirect_with_notice("/", &Notice::error(err.user_message(locale))),
    }
}

pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(session) = Session::from_headers(&headers) {
        state.store.forget(&session).await;
        info!(user = %session.user_id, "logged out");
    }
    redirect_with_cookies("/", Session::clear_cookie_headers())
}

pub async fn dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let Some(session) = Session::from_headers(&headers) else {
        return Redirect::to("/").into_response();
    };

    let locale = state.config.locale;
    let mut notice = Notice::from_query(query.notice.as_deref(), query.kind.as_deref());
    let habits = match state.store.habits(&state.client, &session).await {
        Ok(habits) => habits,
        Err(err) => {
            notice = Some(Notice::error(err.user_message(locale)));
            Arc::new(Vec::new())
        }
    };

    let today = state.config.today();
    let notice = notice.as_ref();
    let page = match Tab::parse(query.tab.as_deref()) {
        Tab::Calendar => {
            let cursor = requested_month(query.year, query.month)
                .unwrap_or(MonthCursor::containing(today));
            let Some(grid) = build_month(cursor, &habits, today, locale) else {
                return AppError::bad_request("invalid month").into_response();
            };
            let body = DashboardBody::Calendar {
                grid: &grid,
                habit_count: habits.len(),
            };
            render_dashboard(body, notice, locale)
        }
        Tab::Habits => render_dashboard(DashboardBody::Habits { habits: &habits }, notice, locale),
        Tab::Statistics => {
            let stats = build_stats(&state.config, &habits);
            render_dashboard(DashboardBody::Statistics { stats: &stats }, notice, locale)
        }
    };

    Html(page).into_response()
}

pub async fn create_habit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<NewHabitForm>,
) -> Response {
    let Some(session) = Session::from_headers(&headers) else {
        return Redirect::to("/").into_response();
    };

    let locale = state.config.locale;
    let result = actions::create_habit(&state.client, &state.store, &session, &form.name).await;
    let notice = match result {
        Ok(()) => Notice::ok(locale.texts().habit_added),
        Err(err) => Notice::error(err.user_message(locale)),
    };
    redirect_with_notice(&dashboard_url(Tab::Habits, None), &notice)
}

pub async fn delete_habit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(habit_id): Path<String>,
) -> Response {
    let Some(session) = Session::from_headers(&headers) else {
        return Redirect::to("/").into_response();
    };

    let locale = state.config.locale;
    let result = actions::delete_habit(&state.client, &state.store, &session, &habit_id).await;
    let notice = match result {
        Ok(()) => Notice::ok(locale.texts().habit_deleted),
        Err(err) => Notice::error(err.user_message(locale)),
    };
    redirect_with_notice(&dashboard_url(Tab::Habits, None), &notice)
}

pub async fn toggle_check(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ToggleForm>,
) -> Response {
    let Some(session) = Session::from_headers(&headers) else {
        return Redirect::to("/").into_response();
    };

    let cursor = requested_month(form.year, form.month);
    let back = dashboard_url(Tab::Calendar, cursor);

    let result = match NaiveDate::parse_from_str(form.date.trim(), "%Y-%m-%d") {
        Ok(date) => {
            let day = CheckDay::new(date);
            actions::toggle_check(&state.client, &state.store, &session, &form.habit_id, day).await
        }
        Err(_) => Err(ClientError::Validation(Invalid::BadDate)),
    };

    match result {
        Ok(_) => Redirect::to(&back).into_response(),
        Err(err) => {
            let message = err.user_message(state.config.locale);
            redirect_with_notice(&back, &Notice::error(message))
        }
    }
}

pub async fn get_habits(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Habit>>, AppError> {
    let session = Session::from_headers(&headers).ok_or_else(AppError::unauthorized)?;
    let habits = state.store.habits(&state.client, &session).await?;
    Ok(Json(habits.as_ref().clone()))
}

pub async fn get_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<StatsResponse>, AppError> {
    let session = Session::from_headers(&headers).ok_or_else(AppError::unauthorized)?;
    let habits = match state.store.habits(&state.client, &session).await {
        Ok(habits) => habits,
        Err(err) => {
            warn!(user = %session.user_id, "statistics fetch failed: {err}");
            Arc::new(Vec::new())
        }
    };
    Ok(Json(build_stats(&state.config, &habits)))
}

pub async fn get_calendar(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<MonthQuery>,
) -> Result<Json<MonthGrid>, AppError> {
    let session = Session::from_headers(&headers).ok_or_else(AppError::unauthorized)?;
    let today = state.config.today();
    let cursor = match (query.year, query.month) {
        (None, None) => MonthCursor::containing(today),
        (year, month) => requested_month(year, month)
            .ok_or_else(|| AppError::bad_request("year and month must name a valid month"))?,
    };

    let habits = state.store.habits(&state.client, &session).await?;
    let grid = build_month(cursor, &habits, today, state.config.locale)
        .ok_or_else(|| AppError::bad_request("invalid month"))?;
    Ok(Json(grid))
}

pub async fn not_found(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(render_not_found(state.config.locale)))
}

fn validate_registration(email: &str, password: &str, confirm: &str) -> Result<(), Invalid> {
    if email.is_empty() || password.is_empty() {
        return Err(Invalid::MissingCredentials);
    }
    if password != confirm {
        return Err(Invalid::PasswordMismatch);
    }
    Ok(())
}

fn requested_month(year: Option<i32>, month: Option<u32>) -> Option<MonthCursor> {
    MonthCursor::new(year?, month?)
}

fn dashboard_url(tab: Tab, cursor: Option<MonthCursor>) -> String {
    match cursor {
        Some(cursor) => format!(
            "/dashboard?tab={}&year={}&month={}",
            tab.slug(),
            cursor.year,
            cursor.month
        ),
        None => format!("/dashboard?tab={}", tab.slug()),
    }
}

fn redirect_with_notice(path: &str, notice: &Notice) -> Response {
    let separator = if path.contains('?') { '&' } else { '?' };
    Redirect::to(&format!("{path}{separator}{}", notice.to_query())).into_response()
}

fn redirect_with_cookies(path: &str, cookies: Vec<HeaderValue>) -> Response {
    let mut response = Redirect::to(path).into_response();
    for cookie in cookies {
        response.headers_mut().append(header::SET_COOKIE, cookie);
    }
    response
}
