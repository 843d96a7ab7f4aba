use crate::error::ApiResponse;
use crate::model::employee::Employee;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Service API",
        version = "1.0.0",
        description = r#"
## Employee Service

CRUD API for managing employee records.

### Endpoints
- List, fetch, create, update and delete employees

### Response Format
- JSON responses; mutations and failures share a uniform envelope
  (`status`, `message`, optional `errors` / `fieldErrors`)
- Messages are localized from the `Accept-Language` header
- A missing record answers 200 with a not-found envelope, not 404

Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::create_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,
    ),
    components(
        schemas(
            Employee,
            ApiResponse
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
    )
)]
pub struct ApiDoc;
