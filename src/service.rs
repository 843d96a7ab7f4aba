use crate::error::{ApiError, ApiResponse};
use crate::messages::{self, Locale};
use crate::model::employee::Employee;
use crate::repository::EmployeeRepository;
use std::sync::Arc;
use tracing::{info, warn};

/// Orchestrates loads and mutations over the injected repository and owns
/// the not-found signaling: `find_by_id` raises the not-found condition,
/// `find_by_email` reports absence as `None` so the uniqueness check can
/// tell "no such email" apart from a failure.
#[derive(Clone)]
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all(&self) -> Result<Vec<Employee>, ApiError> {
        Ok(self.repository.find_all().await?)
    }

    pub async fn find_by_id(&self, id: u64, locale: Locale) -> Result<Employee, ApiError> {
        match self.repository.find_by_id(id).await? {
            Some(employee) => Ok(employee),
            None => {
                let message = messages::format("error_code_employee_id_not_found", id, locale);
                warn!(id, "Employee not found");
                Err(ApiError::NotFound(message))
            }
        }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, ApiError> {
        let found = self.repository.find_by_email(email).await?;
        if found.is_none() {
            info!(email, "No employee with this email");
        }
        Ok(found)
    }

    /// Insert-or-update decided by loading the current row first: when it
    /// exists its fields are overwritten and re-saved, otherwise the payload
    /// is inserted as a new row (id 0 lets the store assign one).
    pub async fn save(&self, employee: &Employee, locale: Locale) -> Result<ApiResponse, ApiError> {
        let to_save = match self.repository.find_by_id(employee.id).await? {
            Some(mut current) => {
                current.first_name = employee.first_name.clone();
                current.last_name = employee.last_name.clone();
                current.email = employee.email.clone();
                current
            }
            None => employee.clone(),
        };

        let saved = self.repository.save(&to_save).await?;
        info!(id = saved.id, "Saved employee");

        Ok(ApiResponse::ok(messages::get(
            "employee_save_success",
            locale,
        )))
    }

    pub async fn delete(&self, id: u64, locale: Locale) -> Result<ApiResponse, ApiError> {
        let removed = self.repository.delete_by_id(id).await?;
        if removed == 0 {
            // existence was pre-validated, so a zero-row delete is a store
            // failure rather than a domain not-found
            warn!(id, "Delete affected no rows");
            return Err(ApiError::Internal(messages::get("error_internal", locale)));
        }

        info!(id, "Deleted employee");
        Ok(ApiResponse::ok(messages::get(
            "employee_delete_success",
            locale,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::InMemoryEmployeeRepository;

    fn service(repo: Arc<InMemoryEmployeeRepository>) -> EmployeeService {
        EmployeeService::new(repo)
    }

    #[actix_web::test]
    async fn save_with_zero_id_inserts_and_assigns_id() {
        let repo = Arc::new(InMemoryEmployeeRepository::new());
        let svc = service(repo.clone());

        let ack = svc
            .save(&Employee::new("John", "Doe", "john@company.com"), Locale::En)
            .await
            .unwrap();
        assert_eq!(ack.status, 200);
        assert_eq!(ack.message, "Employee saved successfully");

        let all = svc.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, 1);
    }

    #[actix_web::test]
    async fn save_with_existing_id_overwrites_fields() {
        let repo = Arc::new(InMemoryEmployeeRepository::new());
        let svc = service(repo.clone());
        svc.save(&Employee::new("John", "Doe", "john@company.com"), Locale::En)
            .await
            .unwrap();

        let mut updated = Employee::new("Jane", "Doe", "jane@company.com");
        updated.id = 1;
        svc.save(&updated, Locale::En).await.unwrap();

        let row = svc.find_by_id(1, Locale::En).await.unwrap();
        assert_eq!(row.first_name, "Jane");
        assert_eq!(row.email, "jane@company.com");
        assert_eq!(svc.get_all().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn find_by_id_miss_is_not_found() {
        let svc = service(Arc::new(InMemoryEmployeeRepository::new()));

        match svc.find_by_id(7, Locale::En).await {
            Err(ApiError::NotFound(message)) => {
                assert_eq!(message, "Employee with id=7 not found");
            }
            other => panic!("expected not-found, got {other:?}"),
        }
    }

    #[actix_web::test]
    async fn find_by_email_miss_is_none_not_an_error() {
        let svc = service(Arc::new(InMemoryEmployeeRepository::new()));
        assert!(svc.find_by_email("ghost@company.com").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn delete_removes_the_row() {
        let repo = Arc::new(InMemoryEmployeeRepository::new());
        let svc = service(repo.clone());
        svc.save(&Employee::new("John", "Doe", "john@company.com"), Locale::En)
            .await
            .unwrap();

        let ack = svc.delete(1, Locale::En).await.unwrap();
        assert_eq!(ack.message, "Employee deleted successfully");
        assert!(svc.get_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn delete_of_missing_row_is_internal_error() {
        let svc = service(Arc::new(InMemoryEmployeeRepository::new()));
        assert!(matches!(
            svc.delete(7, Locale::En).await,
            Err(ApiError::Internal(_))
        ));
    }
}
