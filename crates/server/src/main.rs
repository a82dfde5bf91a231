// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use timetrack_api::{
    ApiError, CalendarDayInfo, CategoryInfo, ChangeVacationStatusRequest,
    CreateCalendarDayRequest, CreateReportRequest, CreateStandardRequest, CreateVacationRequest,
    MessageResponse, MonthStatsResponse, ReportInfo, StandardInfo, UpdateReportRequest,
    UpdateStandardRequest, VacationInfo, VacationStatsResponse, change_vacation_status,
    create_calendar_day, create_report, create_standard, create_vacation, delete_report,
    delete_vacation, get_month_stats, get_vacation_stats, list_all_vacations, list_calendar_month,
    list_calendar_year, list_categories, list_reports, list_standards, list_vacation_years,
    list_vacations, resolve_well_known_categories, update_report, update_standard,
};
use timetrack_domain::{VacationEntitlement, WellKnownCategories};
use timetrack_persistence::Persistence;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, error, info};

/// Time tracking server - HTTP server for vacation days and time reports
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, conflicts_with = "mysql_url")]
    database: Option<String>,

    /// `MySQL`/`MariaDB` connection URL. Takes the place of `--database`.
    #[arg(long)]
    mysql_url: Option<String>,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Yearly vacation entitlement in days. When omitted the stored
    /// `vacation_duration` setting is read on every request.
    #[arg(long)]
    vacation_days: Option<u32>,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The persistence layer, one connection behind a mutex.
    persistence: Arc<Mutex<Persistence>>,
    /// Categories resolved at startup.
    categories: Arc<WellKnownCategories>,
    /// Entitlement override from the command line.
    entitlement: Option<VacationEntitlement>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// HTTP status text.
    error: String,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %err, "Request failed");
        } else {
            debug!(error = %err, status = status.as_u16(), "Request rejected");
        }

        Self {
            status,
            message: err.to_string(),
        }
    }
}

// ========================================================================
// Reports
// ========================================================================

/// Handler for GET `/report/list/{user}/{month}/{year}`.
async fn handle_list_reports(
    AxumState(app_state): AxumState<AppState>,
    Path((user, month, year)): Path<(String, i32, i32)>,
) -> Result<Json<Vec<ReportInfo>>, HttpError> {
    info!(user = %user, month, year, "Handling list_reports request");

    let mut persistence = app_state.persistence.lock().await;
    let reports: Vec<ReportInfo> = list_reports(&mut persistence, &user, month, year)?;

    Ok(Json(reports))
}

/// Handler for GET `/report/monthstats/{user}/{month}/{year}`.
async fn handle_month_stats(
    AxumState(app_state): AxumState<AppState>,
    Path((user, month, year)): Path<(String, i32, i32)>,
) -> Result<Json<MonthStatsResponse>, HttpError> {
    info!(user = %user, month, year, "Handling month_stats request");

    let mut persistence = app_state.persistence.lock().await;
    let stats: MonthStatsResponse =
        get_month_stats(&mut persistence, &app_state.categories, &user, month, year)?;

    Ok(Json(stats))
}

/// Handler for POST `/report/create`.
async fn handle_create_report(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateReportRequest>,
) -> Result<(StatusCode, Json<ReportInfo>), HttpError> {
    info!(user = %req.user_id, "Handling create_report request");

    let mut persistence = app_state.persistence.lock().await;
    let report: ReportInfo = create_report(&mut persistence, &req)?;

    Ok((StatusCode::CREATED, Json(report)))
}

/// Handler for POST `/report/update`.
async fn handle_update_report(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<UpdateReportRequest>,
) -> Result<Json<ReportInfo>, HttpError> {
    info!(report_id = %req.id, "Handling update_report request");

    let mut persistence = app_state.persistence.lock().await;
    let report: ReportInfo = update_report(&mut persistence, &req)?;

    Ok(Json(report))
}

/// Handler for DELETE `/report/delete/{user}/{day}/{month}/{year}`.
async fn handle_delete_report(
    AxumState(app_state): AxumState<AppState>,
    Path((user, day, month, year)): Path<(String, i32, i32, i32)>,
) -> Result<Json<MessageResponse>, HttpError> {
    info!(user = %user, day, month, year, "Handling delete_report request");

    let mut persistence = app_state.persistence.lock().await;
    let response: MessageResponse = delete_report(&mut persistence, &user, day, month, year)?;

    Ok(Json(response))
}

// ========================================================================
// Vacations
// ========================================================================

/// Handler for GET `/vacation/list/{year}`.
///
/// Lists every user's vacations; used by administrative views.
async fn handle_list_all_vacations(
    AxumState(app_state): AxumState<AppState>,
    Path(year): Path<i32>,
) -> Result<Json<Vec<VacationInfo>>, HttpError> {
    info!(year, "Handling list_all_vacations request");

    let mut persistence = app_state.persistence.lock().await;
    let vacations: Vec<VacationInfo> = list_all_vacations(&mut persistence, year)?;

    Ok(Json(vacations))
}

/// Handler for GET `/vacation/list/{user}/{year}`.
async fn handle_list_vacations(
    AxumState(app_state): AxumState<AppState>,
    Path((user, year)): Path<(String, i32)>,
) -> Result<Json<Vec<VacationInfo>>, HttpError> {
    info!(user = %user, year, "Handling list_vacations request");

    let mut persistence = app_state.persistence.lock().await;
    let vacations: Vec<VacationInfo> = list_vacations(&mut persistence, &user, year)?;

    Ok(Json(vacations))
}

/// Handler for GET `/vacation/stats/{user}/{year}`.
async fn handle_vacation_stats(
    AxumState(app_state): AxumState<AppState>,
    Path((user, year)): Path<(String, i32)>,
) -> Result<Json<VacationStatsResponse>, HttpError> {
    info!(user = %user, year, "Handling vacation_stats request");

    let mut persistence = app_state.persistence.lock().await;
    let stats: VacationStatsResponse =
        get_vacation_stats(&mut persistence, app_state.entitlement, &user, year)?;

    Ok(Json(stats))
}

/// Handler for GET `/vacation/years/{user}`.
async fn handle_vacation_years(
    AxumState(app_state): AxumState<AppState>,
    Path(user): Path<String>,
) -> Result<Json<Vec<i32>>, HttpError> {
    info!(user = %user, "Handling vacation_years request");

    let mut persistence = app_state.persistence.lock().await;
    let years: Vec<i32> = list_vacation_years(&mut persistence, &user)?;

    Ok(Json(years))
}

/// Handler for POST `/vacation/create`.
async fn handle_create_vacation(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateVacationRequest>,
) -> Result<Json<VacationInfo>, HttpError> {
    info!(
        user = %req.user_id,
        start_date = %req.start_date,
        end_date = %req.end_date,
        "Handling create_vacation request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let vacation: VacationInfo = create_vacation(&mut persistence, req)?;

    Ok(Json(vacation))
}

/// Handler for POST `/vacation/change-status`.
async fn handle_change_vacation_status(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ChangeVacationStatusRequest>,
) -> Result<Json<MessageResponse>, HttpError> {
    info!(vacation_id = %req.id, status = %req.status, "Handling change_vacation_status request");

    let mut persistence = app_state.persistence.lock().await;
    let response: MessageResponse = change_vacation_status(&mut persistence, &req)?;

    Ok(Json(response))
}

/// Handler for DELETE `/vacation/delete/{vacation}`.
async fn handle_delete_vacation(
    AxumState(app_state): AxumState<AppState>,
    Path(vacation_id): Path<String>,
) -> Result<Json<MessageResponse>, HttpError> {
    info!(vacation_id = %vacation_id, "Handling delete_vacation request");

    let mut persistence = app_state.persistence.lock().await;
    let response: MessageResponse = delete_vacation(&mut persistence, &vacation_id)?;

    Ok(Json(response))
}

// ========================================================================
// Calendar, categories, standards
// ========================================================================

/// Handler for GET `/calendar/list/{month}/{year}`.
async fn handle_list_calendar_month(
    AxumState(app_state): AxumState<AppState>,
    Path((month, year)): Path<(i32, i32)>,
) -> Result<Json<Vec<CalendarDayInfo>>, HttpError> {
    info!(month, year, "Handling list_calendar_month request");

    let mut persistence = app_state.persistence.lock().await;
    let days: Vec<CalendarDayInfo> = list_calendar_month(&mut persistence, month, year)?;

    Ok(Json(days))
}

/// Handler for GET `/calendar/list/{year}`.
async fn handle_list_calendar_year(
    AxumState(app_state): AxumState<AppState>,
    Path(year): Path<i32>,
) -> Result<Json<Vec<CalendarDayInfo>>, HttpError> {
    info!(year, "Handling list_calendar_year request");

    let mut persistence = app_state.persistence.lock().await;
    let days: Vec<CalendarDayInfo> = list_calendar_year(&mut persistence, year)?;

    Ok(Json(days))
}

/// Handler for POST `/calendar/create`.
async fn handle_create_calendar_day(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateCalendarDayRequest>,
) -> Result<(StatusCode, Json<CalendarDayInfo>), HttpError> {
    info!(
        day = req.day,
        month = req.month,
        year = req.year,
        kind = %req.kind,
        "Handling create_calendar_day request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let day: CalendarDayInfo = create_calendar_day(&mut persistence, req)?;

    Ok((StatusCode::CREATED, Json(day)))
}

/// Handler for GET `/type/list`.
async fn handle_list_types(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<CategoryInfo>>, HttpError> {
    info!("Handling list_types request");

    let mut persistence = app_state.persistence.lock().await;
    let categories: Vec<CategoryInfo> = list_categories(&mut persistence)?;

    Ok(Json(categories))
}

/// Handler for GET `/standard/listforsetting/{year}`.
async fn handle_list_standards(
    AxumState(app_state): AxumState<AppState>,
    Path(year): Path<i32>,
) -> Result<Json<Vec<StandardInfo>>, HttpError> {
    info!(year, "Handling list_standards request");

    let mut persistence = app_state.persistence.lock().await;
    let standards: Vec<StandardInfo> = list_standards(&mut persistence, year)?;

    Ok(Json(standards))
}

/// Handler for POST `/standard/create`.
async fn handle_create_standard(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateStandardRequest>,
) -> Result<(StatusCode, Json<StandardInfo>), HttpError> {
    info!(
        month = req.month,
        year = req.year,
        gender_id = req.gender_id,
        "Handling create_standard request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let standard: StandardInfo = create_standard(&mut persistence, &req)?;

    Ok((StatusCode::CREATED, Json(standard)))
}

/// Handler for POST `/standard/update`.
async fn handle_update_standard(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<UpdateStandardRequest>,
) -> Result<Json<StandardInfo>, HttpError> {
    info!(standard_id = %req.id, "Handling update_standard request");

    let mut persistence = app_state.persistence.lock().await;
    let standard: StandardInfo = update_standard(&mut persistence, &req)?;

    Ok(Json(standard))
}

/// Builds the application router with all endpoints.
///
/// Each resource group is its own router nested under `/v1`.
fn build_router(app_state: AppState) -> Router {
    let reports: Router<AppState> = Router::new()
        .route("/list/{user}/{month}/{year}", get(handle_list_reports))
        .route("/monthstats/{user}/{month}/{year}", get(handle_month_stats))
        .route("/create", post(handle_create_report))
        .route("/update", post(handle_update_report))
        .route(
            "/delete/{user}/{day}/{month}/{year}",
            delete(handle_delete_report),
        );

    let vacations: Router<AppState> = Router::new()
        .route("/list/{year}", get(handle_list_all_vacations))
        .route("/list/{user}/{year}", get(handle_list_vacations))
        .route("/stats/{user}/{year}", get(handle_vacation_stats))
        .route("/years/{user}", get(handle_vacation_years))
        .route("/create", post(handle_create_vacation))
        .route("/change-status", post(handle_change_vacation_status))
        .route("/delete/{vacation}", delete(handle_delete_vacation));

    let calendar: Router<AppState> = Router::new()
        .route("/list/{month}/{year}", get(handle_list_calendar_month))
        .route("/list/{year}", get(handle_list_calendar_year))
        .route("/create", post(handle_create_calendar_day));

    let types: Router<AppState> = Router::new().route("/list", get(handle_list_types));

    let standards: Router<AppState> = Router::new()
        .route("/create", post(handle_create_standard))
        .route("/update", post(handle_update_standard))
        .route("/listforsetting/{year}", get(handle_list_standards));

    let v1: Router<AppState> = Router::new()
        .nest("/report", reports)
        .nest("/vacation", vacations)
        .nest("/calendar", calendar)
        .nest("/type", types)
        .nest("/standard", standards);

    Router::new()
        .nest("/v1", v1)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

/// Opens the configured database.
fn open_persistence(args: &Args) -> Result<Persistence, Box<dyn std::error::Error>> {
    let persistence: Persistence = if let Some(url) = &args.mysql_url {
        info!("Using MySQL/MariaDB database");
        Persistence::new_with_mysql(url)?
    } else if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };
    Ok(persistence)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing TimeTrack Server");

    let mut persistence: Persistence = open_persistence(&args)?;

    // Monthly statistics cannot be computed without these
    let categories: WellKnownCategories =
        resolve_well_known_categories(&mut persistence).inspect_err(|err| {
            error!(error = %err, "Refusing to start without well-known report categories");
        })?;

    let entitlement: Option<VacationEntitlement> = args.vacation_days.map(VacationEntitlement::new);
    if let Some(entitlement) = entitlement {
        info!(days = entitlement.days(), "Using fixed vacation entitlement");
    }

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        categories: Arc::new(categories),
        entitlement,
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
