//! Shared contracts between the console frontend and the banking HTTP API:
//! entity models, create/update DTOs, client-side validation and the
//! server error-body shape.

pub mod domain;
pub mod shared;
