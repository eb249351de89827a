//! Empleado Repository

use rust_decimal::Decimal;
use sqlx::{MySql, MySqlPool, QueryBuilder};

use super::{RepoError, RepoResult};
use crate::db::models::{Empleado, EmpleadoPayload};

const MSG_NO_ENCONTRADO: &str = "Empleado no encontrado";

/// Fetch all rows
pub async fn find_all(pool: &MySqlPool) -> RepoResult<Vec<Empleado>> {
    let empleados = sqlx::query_as::<_, Empleado>(
        "SELECT id, nombre, puesto, salario FROM empleados ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(empleados)
}

/// Fetch one row by id
pub async fn find_by_id(pool: &MySqlPool, id: i64) -> RepoResult<Option<Empleado>> {
    let empleado = sqlx::query_as::<_, Empleado>(
        "SELECT id, nombre, puesto, salario FROM empleados WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(empleado)
}

/// Insert one row and return the generated id
pub async fn insert(
    pool: &MySqlPool,
    nombre: &str,
    puesto: &str,
    salario: Decimal,
) -> RepoResult<i64> {
    let result = sqlx::query("INSERT INTO empleados (nombre, puesto, salario) VALUES (?, ?, ?)")
        .bind(nombre)
        .bind(puesto)
        .bind(salario)
        .execute(pool)
        .await?;
    Ok(result.last_insert_id() as i64)
}

/// Build the multi-row INSERT for the bulk endpoint
///
/// Fields are bound as given; an absent field binds SQL NULL and the
/// NOT NULL columns reject it at the driver.
fn bulk_insert_query(empleados: &[EmpleadoPayload]) -> QueryBuilder<'_, MySql> {
    let mut builder =
        QueryBuilder::<MySql>::new("INSERT INTO empleados (nombre, puesto, salario) ");
    builder.push_values(empleados, |mut row, e| {
        row.push_bind(e.nombre.as_deref())
            .push_bind(e.puesto.as_deref())
            .push_bind(e.salario);
    });
    builder
}

/// Insert many rows in one statement; returns the inserted-row count
pub async fn insert_many(pool: &MySqlPool, empleados: &[EmpleadoPayload]) -> RepoResult<u64> {
    let mut builder = bulk_insert_query(empleados);
    let result = builder.build().execute(pool).await?;
    Ok(result.rows_affected())
}

/// Replace all fields of a row; NotFound when the id does not exist
pub async fn update(
    pool: &MySqlPool,
    id: i64,
    nombre: &str,
    puesto: &str,
    salario: Decimal,
) -> RepoResult<()> {
    let result = sqlx::query("UPDATE empleados SET nombre = ?, puesto = ?, salario = ? WHERE id = ?")
        .bind(nombre)
        .bind(puesto)
        .bind(salario)
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        // MySQL reports zero affected rows for a no-op update as well;
        // distinguish that from a missing id before answering 404.
        if find_by_id(pool, id).await?.is_none() {
            return Err(RepoError::NotFound(MSG_NO_ENCONTRADO.to_string()));
        }
    }
    Ok(())
}

/// Delete a row; NotFound when the id does not exist
pub async fn delete(pool: &MySqlPool, id: i64) -> RepoResult<()> {
    let result = sqlx::query("DELETE FROM empleados WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(MSG_NO_ENCONTRADO.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(nombre: Option<&str>) -> EmpleadoPayload {
        EmpleadoPayload {
            nombre: nombre.map(String::from),
            puesto: Some("Analista".into()),
            salario: Some("1800".parse().unwrap()),
        }
    }

    #[test]
    fn bulk_insert_builds_one_row_group_per_element() {
        let empleados = vec![payload(Some("Ana")), payload(Some("Luis"))];
        let sql = bulk_insert_query(&empleados).into_sql();

        assert!(sql.starts_with("INSERT INTO empleados (nombre, puesto, salario) VALUES"));
        // one placeholder per field, one group per element
        assert_eq!(sql.matches('?').count(), 6);
        assert_eq!(sql.matches('(').count(), 3);
    }

    #[test]
    fn bulk_insert_keeps_missing_fields_as_placeholders() {
        let empleados = vec![payload(None)];
        let sql = bulk_insert_query(&empleados).into_sql();

        // a missing field still binds a placeholder (NULL at execution)
        assert_eq!(sql.matches('?').count(), 3);
    }
}
