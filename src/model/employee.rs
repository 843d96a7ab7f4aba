use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Persisted row and JSON transfer shape are identical, so one struct
/// covers both. All fields are defaulted: an incoming body may omit any
/// of them and still reach the validator, which reports every gap at once.
#[derive(Debug, Clone, Default, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(default, rename_all = "camelCase")]
#[schema(
    example = json!({
        "id": 1,
        "firstName": "John",
        "lastName": "Doe",
        "email": "john.doe@company.com"
    })
)]
pub struct Employee {
    /// 0 means "not persisted yet"; the store assigns ids on insert.
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = "John")]
    pub first_name: String,

    #[schema(example = "Doe")]
    pub last_name: String,

    #[schema(example = "john.doe@company.com", format = "email")]
    pub email: String,
}

impl Employee {
    pub fn new(first_name: &str, last_name: &str, email: &str) -> Self {
        Self {
            id: 0,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        }
    }
}
