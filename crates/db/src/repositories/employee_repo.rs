//! Repository for the `employees` table.

use opsdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::employee::{CreateEmployee, Employee, UpdateEmployee};

const COLUMNS: &str = "id, employee_code, first_name, last_name, email, phone, \
                       position, department, status, join_date, salary, \
                       created_at, updated_at";

/// Provides CRUD operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a new employee, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEmployee) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "INSERT INTO employees \
                (employee_code, first_name, last_name, email, phone, position, \
                 department, status, join_date, salary) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, 'Active'), $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(&input.employee_code)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.position)
            .bind(&input.department)
            .bind(&input.status)
            .bind(input.join_date)
            .bind(input.salary)
            .fetch_one(pool)
            .await
    }

    /// List all employees ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees ORDER BY created_at DESC");
        sqlx::query_as::<_, Employee>(&query).fetch_all(pool).await
    }

    /// Merge the non-`None` fields of `input` into an employee.
    ///
    /// Returns `true` if a row was updated.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEmployee,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE employees SET \
                employee_code = COALESCE($2, employee_code), \
                first_name = COALESCE($3, first_name), \
                last_name = COALESCE($4, last_name), \
                email = COALESCE($5, email), \
                phone = COALESCE($6, phone), \
                position = COALESCE($7, position), \
                department = COALESCE($8, department), \
                status = COALESCE($9, status), \
                join_date = COALESCE($10, join_date), \
                salary = COALESCE($11, salary), \
                updated_at = now() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.employee_code)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.position)
        .bind(&input.department)
        .bind(&input.status)
        .bind(input.join_date)
        .bind(input.salary)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete an employee by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
