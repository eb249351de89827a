//! Service layer
//!
//! - [`https`] - router assembly and middleware stack

pub mod https;
