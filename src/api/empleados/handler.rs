//! Empleado API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use serde_json::Value;

use crate::core::ServerState;
use crate::db::models::{Empleado, EmpleadoPayload};
use crate::db::repository::empleado;
use crate::utils::validation::validate_empleado;
use crate::utils::{AppError, AppResult, MensajeBody};

const MSG_ARRAY_INVALIDO: &str = "Debe enviar un array de empleados válido.";

/// Response for a single insert
#[derive(Serialize)]
pub struct AltaResponse {
    mensaje: &'static str,
    id: i64,
}

/// Response for the bulk insert
#[derive(Serialize)]
pub struct AltaMasivaResponse {
    mensaje: &'static str,
    #[serde(rename = "filasInsertadas")]
    filas_insertadas: u64,
}

/// GET /empleados - list all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Empleado>>> {
    let empleados = empleado::find_all(&state.pool).await?;
    Ok(Json(empleados))
}

/// GET /empleados/:id - get one employee
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Empleado>> {
    let row = empleado::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Empleado no encontrado"))?;
    Ok(Json(row))
}

/// POST /empleados - create an employee
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmpleadoPayload>,
) -> AppResult<(StatusCode, Json<AltaResponse>)> {
    let (nombre, puesto, salario) = validate_empleado(&payload)?;

    let id = empleado::insert(&state.pool, nombre, puesto, salario).await?;

    Ok((
        StatusCode::CREATED,
        Json(AltaResponse {
            mensaje: "Empleado agregado",
            id,
        }),
    ))
}

/// POST /empleados/masivo - create many employees in one statement
pub async fn create_many(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<AltaMasivaResponse>)> {
    if !body.as_array().is_some_and(|a| !a.is_empty()) {
        return Err(AppError::validation(MSG_ARRAY_INVALIDO));
    }

    // Elements are not field-validated here; missing fields bind NULL
    // and the NOT NULL columns reject the whole statement.
    let empleados: Vec<EmpleadoPayload> =
        serde_json::from_value(body).map_err(|_| AppError::validation(MSG_ARRAY_INVALIDO))?;

    let filas_insertadas = empleado::insert_many(&state.pool, &empleados).await?;

    Ok((
        StatusCode::CREATED,
        Json(AltaMasivaResponse {
            mensaje: "Empleados agregados correctamente",
            filas_insertadas,
        }),
    ))
}

/// PUT /empleados/:id - replace all fields of an employee
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmpleadoPayload>,
) -> AppResult<Json<MensajeBody>> {
    let (nombre, puesto, salario) = validate_empleado(&payload)?;

    empleado::update(&state.pool, id, nombre, puesto, salario).await?;

    Ok(Json(MensajeBody {
        mensaje: "Empleado actualizado correctamente".to_string(),
    }))
}

/// DELETE /empleados/:id - delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MensajeBody>> {
    empleado::delete(&state.pool, id).await?;

    Ok(Json(MensajeBody {
        mensaje: "Empleado eliminado correctamente".to_string(),
    }))
}
