//! HTTP request handlers.
//!
//! Controllers extract path, query and body values, delegate to the service layer and map
//! domain models to DTOs and status codes. Every handler returns
//! `Result<impl IntoResponse, AppError>` so failures share the error envelope.

pub mod team;
