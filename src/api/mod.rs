pub mod employee;

use crate::service::EmployeeService;
use crate::validator::EmployeeValidator;

/// Shared application state: service and validator, injected once at
/// construction instead of fetched from a runtime registry.
#[derive(Clone)]
pub struct AppState {
    pub service: EmployeeService,
    pub validator: EmployeeValidator,
}

impl AppState {
    pub fn new(service: EmployeeService) -> Self {
        let validator = EmployeeValidator::new(service.clone());
        Self { service, validator }
    }
}
