//! Input validation helpers
//!
//! The three employee fields are all required: the strings must be
//! non-empty and the salary non-zero. Any miss answers with the single
//! message the API has always served.

use rust_decimal::Decimal;

use crate::db::models::EmpleadoPayload;
use crate::utils::AppError;

/// Message served for any missing or empty field
pub const MSG_CAMPOS_OBLIGATORIOS: &str = "Todos los campos son obligatorios";

/// Check the required employee fields and hand back the validated values.
pub fn validate_empleado(payload: &EmpleadoPayload) -> Result<(&str, &str, Decimal), AppError> {
    let nombre = payload.nombre.as_deref().filter(|v| !v.trim().is_empty());
    let puesto = payload.puesto.as_deref().filter(|v| !v.trim().is_empty());
    let salario = payload.salario.filter(|s| !s.is_zero());

    match (nombre, puesto, salario) {
        (Some(nombre), Some(puesto), Some(salario)) => Ok((nombre, puesto, salario)),
        _ => Err(AppError::validation(MSG_CAMPOS_OBLIGATORIOS)),
    }
}
