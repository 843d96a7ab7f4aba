use crate::model::employee::Employee;
use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::debug;

/// Single-table CRUD access. Injected into the service as a trait object so
/// tests can swap the MySQL store for an in-memory one.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Employee>, sqlx::Error>;

    async fn find_by_id(&self, id: u64) -> Result<Option<Employee>, sqlx::Error>;

    /// Email uniqueness is checked by lookup, not by a store constraint;
    /// a unique index on `email` is expected but not assumed here.
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, sqlx::Error>;

    /// Upsert by primary key: inserts when `id` is 0, updates otherwise.
    /// Returns the saved row with its assigned id.
    async fn save(&self, employee: &Employee) -> Result<Employee, sqlx::Error>;

    /// Returns the number of rows removed (0 when the id does not exist).
    async fn delete_by_id(&self, id: u64) -> Result<u64, sqlx::Error>;
}

pub struct MySqlEmployeeRepository {
    pool: MySqlPool,
}

impl MySqlEmployeeRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for MySqlEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, sqlx::Error> {
        sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, email FROM employees ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Employee>, sqlx::Error> {
        sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, email FROM employees WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, sqlx::Error> {
        sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, email FROM employees WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
    }

    async fn save(&self, employee: &Employee) -> Result<Employee, sqlx::Error> {
        if employee.id == 0 {
            let result = sqlx::query(
                "INSERT INTO employees (first_name, last_name, email) VALUES (?, ?, ?)",
            )
            .bind(&employee.first_name)
            .bind(&employee.last_name)
            .bind(&employee.email)
            .execute(&self.pool)
            .await?;

            let id = result.last_insert_id();
            debug!(id, "Inserted employee");

            let mut saved = employee.clone();
            saved.id = id;
            Ok(saved)
        } else {
            sqlx::query("UPDATE employees SET first_name = ?, last_name = ?, email = ? WHERE id = ?")
                .bind(&employee.first_name)
                .bind(&employee.last_name)
                .bind(&employee.email)
                .bind(employee.id)
                .execute(&self.pool)
                .await?;

            debug!(id = employee.id, "Updated employee");
            Ok(employee.clone())
        }
    }

    async fn delete_by_id(&self, id: u64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(id, rows = result.rows_affected(), "Deleted employee");
        Ok(result.rows_affected())
    }
}
