use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use fieldserve_core::{BookingId, TechnicianId};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_booking).get(list_bookings))
        .route("/:id", get(get_booking))
        .route("/:id/status", post(update_status))
        .route("/:id/cancel", post(cancel_booking))
        .route("/:id/payment", post(mark_payment))
        .route("/:id/mark-paid", post(mark_fully_paid))
        .route("/:id/assign", post(assign_technician))
        .route("/:id/invoice", get(get_invoice))
}

fn parse_booking_id(id: &str) -> Result<BookingId, axum::response::Response> {
    id.parse::<BookingId>().map_err(|_| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid booking id")
    })
}

pub async fn create_booking(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateBookingRequest>,
) -> axum::response::Response {
    match services.create_booking(body.into_new_booking()) {
        Ok(booking) => (StatusCode::CREATED, Json(dto::booking_to_json(&booking))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_bookings(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let items = services
        .bookings()
        .iter()
        .map(dto::booking_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn get_booking(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_booking_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.booking(id) {
        Ok(booking) => (StatusCode::OK, Json(dto::booking_to_json(&booking))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_status(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateStatusRequest>,
) -> axum::response::Response {
    let id = match parse_booking_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.update_status(id, body.status) {
        Ok(booking) => (StatusCode::OK, Json(dto::booking_to_json(&booking))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn cancel_booking(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_booking_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.cancel_booking(id) {
        Ok(booking) => (StatusCode::OK, Json(dto::booking_to_json(&booking))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn mark_payment(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::MarkPaymentRequest>,
) -> axum::response::Response {
    let id = match parse_booking_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.mark_payment(id, &body.reference) {
        Ok(booking) => (StatusCode::OK, Json(dto::booking_to_json(&booking))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn mark_fully_paid(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_booking_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.mark_fully_paid(id) {
        Ok(booking) => (StatusCode::OK, Json(dto::booking_to_json(&booking))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn assign_technician(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::AssignTechnicianRequest>,
) -> axum::response::Response {
    let id = match parse_booking_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.assign_technician(id, TechnicianId::new(body.technician_id)) {
        Ok(booking) => (StatusCode::OK, Json(dto::booking_to_json(&booking))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_invoice(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_booking_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.invoice(id) {
        Ok(invoice) => (StatusCode::OK, Json(dto::invoice_to_json(&invoice))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
