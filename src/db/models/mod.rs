//! Database Models

pub mod empleado;

// Re-exports
pub use empleado::{Empleado, EmpleadoPayload};
