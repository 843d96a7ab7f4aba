use crate::api::AppState;
use crate::error::{ApiError, ApiResponse};
use crate::messages::Locale;
use crate::model::employee::Employee;
use crate::validator::ActionType;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::info;

fn locale(req: &HttpRequest) -> Locale {
    Locale::from_header(
        req.headers()
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok()),
    )
}

/// List Employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "Employee list", body = [Employee])
    ),
    tag = "Employee"
)]
pub async fn list_employees(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    info!("Listing employees");

    let employees = state.service.get_all().await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Get Employee by ID
///
/// A miss answers 200 with a not-found message envelope, not 404.
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found, or not-found envelope", body = Employee)
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();
    info!(employee_id, "Fetching employee");

    let employee = state.service.find_by_id(employee_id, locale(&req)).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = Employee,
    responses(
        (status = 200, description = "Employee created", body = ApiResponse, example = json!({
            "status": 200,
            "message": "Employee saved successfully"
        })),
        (status = 400, description = "Validation failure", body = ApiResponse, example = json!({
            "status": 400,
            "message": "Validation failed for CREATE action",
            "fieldErrors": ["First name is required"]
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    state: web::Data<AppState>,
    payload: web::Json<Employee>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let locale = locale(&req);
    let mut employee = payload.into_inner();

    // any client-supplied id is discarded so the save inserts a new row
    // instead of overwriting an existing one
    employee.id = 0;
    info!(email = %employee.email, "Creating employee");

    state
        .validator
        .validate(&employee, ActionType::Create, locale)
        .await?;
    let ack = state.service.save(&employee, locale).await?;
    Ok(HttpResponse::Ok().json(ack))
}

/// Update Employee
///
/// The body carries the id. A missing id answers 200 with the same
/// not-found envelope as a GET miss.
#[utoipa::path(
    put,
    path = "/api/employees",
    request_body = Employee,
    responses(
        (status = 200, description = "Employee updated, or not-found envelope", body = ApiResponse, example = json!({
            "status": 200,
            "message": "Employee saved successfully"
        })),
        (status = 400, description = "Validation failure", body = ApiResponse)
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    state: web::Data<AppState>,
    payload: web::Json<Employee>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let locale = locale(&req);
    let employee = payload.into_inner();
    info!(employee_id = employee.id, "Updating employee");

    state
        .validator
        .validate(&employee, ActionType::Update, locale)
        .await?;
    let ack = state.service.save(&employee, locale).await?;
    Ok(HttpResponse::Ok().json(ack))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee deleted, or not-found envelope", body = ApiResponse, example = json!({
            "status": 200,
            "message": "Employee deleted successfully"
        }))
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let locale = locale(&req);
    let employee_id = path.into_inner();
    info!(employee_id, "Deleting employee");

    state
        .validator
        .validate_id(employee_id, ActionType::Delete, locale)
        .await?;
    let ack = state.service.delete(employee_id, locale).await?;
    Ok(HttpResponse::Ok().json(ack))
}
