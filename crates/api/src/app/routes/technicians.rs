use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use fieldserve_core::TechnicianId;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(register_technician).get(list_technicians))
        .route("/:id", get(get_technician))
        .route("/:id/deactivate", post(deactivate_technician))
}

fn parse_technician_id(id: &str) -> Result<TechnicianId, axum::response::Response> {
    id.parse::<TechnicianId>().map_err(|_| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid technician id")
    })
}

pub async fn register_technician(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::RegisterTechnicianRequest>,
) -> axum::response::Response {
    let technician = services.register_technician(&body.name, &body.phone);
    (
        StatusCode::CREATED,
        Json(dto::technician_to_json(&technician)),
    )
        .into_response()
}

pub async fn list_technicians(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let items = services
        .technicians()
        .iter()
        .map(dto::technician_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn get_technician(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_technician_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.technician(id) {
        Ok(t) => (StatusCode::OK, Json(dto::technician_to_json(&t))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn deactivate_technician(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_technician_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.deactivate_technician(id) {
        Ok(t) => (StatusCode::OK, Json(dto::technician_to_json(&t))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
