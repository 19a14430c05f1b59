use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use fieldserve_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let message = err.to_string();
    match err {
        DomainError::BookingNotFound
        | DomainError::TechnicianNotFound
        | DomainError::SubServiceNotFound => json_error(StatusCode::NOT_FOUND, "not_found", message),
        DomainError::Validation(_) | DomainError::InvalidId(_) | DomainError::InvalidQuantity => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", message)
        }
        DomainError::InvalidTransition(_) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invalid_transition", message)
        }
        DomainError::InvalidPaymentTransition(_) => json_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "invalid_payment_transition",
            message,
        ),
        DomainError::TechnicianInactive => json_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "technician_inactive",
            message,
        ),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
