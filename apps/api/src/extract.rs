use axum::extract::FromRequest;

use crate::errors::AppError;

/// `axum::Json` with its rejection mapped onto `AppError::Validation`,
/// so a malformed body is a 400 carrying a `{ message }` payload.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
