use axum::extract::{rejection::PathRejection, Path};

use crate::server::error::AppError;

/// Extracts an integer id from a path extraction result.
///
/// Handlers take `Result<Path<i32>, PathRejection>` so that an unparseable id reaches the
/// client as the standard error envelope instead of axum's plain-text rejection.
///
/// # Arguments
/// - `path` - The raw extraction result for a `{id}` segment
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(AppError::MissingParameter)` - The id segment was absent or not an integer
pub fn parse_path_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, AppError> {
    let Path(id) = path?;

    Ok(id)
}

/// Treats blank strings as "not supplied".
///
/// Partial updates only overwrite a field when the caller sent a non-empty value.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
