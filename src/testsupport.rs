use crate::model::employee::Employee;
use crate::repository::EmployeeRepository;
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory stand-in for the MySQL repository, used by the unit tests.
/// Ids are assigned the way the store would: max existing id + 1.
#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    rows: Mutex<Vec<Employee>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, sqlx::Error> {
        let mut all = self.rows.lock().unwrap().clone();
        all.sort_by_key(|e| e.id);
        Ok(all)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Employee>, sqlx::Error> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, sqlx::Error> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.email == email)
            .cloned())
    }

    async fn save(&self, employee: &Employee) -> Result<Employee, sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        if employee.id == 0 {
            let mut saved = employee.clone();
            saved.id = rows.iter().map(|e| e.id).max().unwrap_or(0) + 1;
            rows.push(saved.clone());
            Ok(saved)
        } else {
            if let Some(existing) = rows.iter_mut().find(|e| e.id == employee.id) {
                *existing = employee.clone();
            } else {
                rows.push(employee.clone());
            }
            Ok(employee.clone())
        }
    }

    async fn delete_by_id(&self, id: u64) -> Result<u64, sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|e| e.id != id);
        Ok((before - rows.len()) as u64)
    }
}
