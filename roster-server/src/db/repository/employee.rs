//! Employee Repository

use super::{RepoError, RepoResult};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT id, name, email, phone, salary FROM employee ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(
        "SELECT id, name, email, phone, salary FROM employee WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(employee)
}

pub async fn create(pool: &SqlitePool, data: EmployeeCreate) -> RepoResult<Employee> {
    let employee = sqlx::query_as::<_, Employee>(
        r#"
        INSERT INTO employee (name, email, phone, salary)
        VALUES (?, ?, ?, ?)
        RETURNING id, name, email, phone, salary
        "#,
    )
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(data.salary)
    .fetch_one(pool)
    .await?;
    Ok(employee)
}

/// Full replacement of the four editable fields; the id never changes.
///
/// The write and the read-back are one statement, so a concurrent delete
/// cannot slip in between them.
pub async fn update(pool: &SqlitePool, id: i64, data: EmployeeUpdate) -> RepoResult<Employee> {
    let employee = sqlx::query_as::<_, Employee>(
        r#"
        UPDATE employee SET name = ?, email = ?, phone = ?, salary = ?
        WHERE id = ?
        RETURNING id, name, email, phone, salary
        "#,
    )
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(data.salary)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    employee.ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM employee WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    fn ann() -> EmployeeCreate {
        EmployeeCreate {
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            phone: None,
            salary: 50000.0,
        }
    }

    #[tokio::test]
    async fn update_returns_the_written_row() {
        let db = DbService::new(":memory:").await.unwrap();
        let created = create(&db.pool, ann()).await.unwrap();

        let replacement = EmployeeUpdate {
            name: "Ann B".to_string(),
            email: "ann.b@x.com".to_string(),
            phone: Some("555-0100".to_string()),
            salary: 61000.0,
        };
        let updated = update(&db.pool, created.id, replacement).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Ann B");
        assert_eq!(updated.phone.as_deref(), Some("555-0100"));

        let fetched = find_by_id(&db.pool, created.id).await.unwrap().unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn update_of_deleted_row_is_not_found() {
        let db = DbService::new(":memory:").await.unwrap();
        let created = create(&db.pool, ann()).await.unwrap();
        delete(&db.pool, created.id).await.unwrap();

        let replacement = EmployeeUpdate {
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            phone: None,
            salary: 50000.0,
        };
        let err = update(&db.pool, created.id, replacement).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }
}
