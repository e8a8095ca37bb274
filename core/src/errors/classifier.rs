//! Decides whether an error's text may reach the client.

use fs_shared::types::response::INTERNAL_ERROR_MESSAGE;

use super::AppError;

/// True only for registered domain sentinels.
pub fn is_exposable(error: &AppError) -> bool {
    matches!(error, AppError::Domain(_))
}

/// The error's own text when exposable, the generic internal error otherwise.
pub fn client_message(error: &AppError) -> String {
    match error {
        AppError::Domain(sentinel) => sentinel.to_string(),
        _ => INTERNAL_ERROR_MESSAGE.to_string(),
    }
}
