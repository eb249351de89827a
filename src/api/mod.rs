//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`empleados`] - employee CRUD

pub mod empleados;
pub mod health;
