//! Empleado Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employee row as stored in the `empleados` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Empleado {
    pub id: i64,
    pub nombre: String,
    pub puesto: String,
    pub salario: Decimal,
}

/// Create/update payload
///
/// Fields are optional so presence is checked in the handler and a
/// missing field produces this service's own 400 body instead of a
/// typed-extractor rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmpleadoPayload {
    pub nombre: Option<String>,
    pub puesto: Option<String>,
    pub salario: Option<Decimal>,
}
