use axum::Router;

pub mod bookings;
pub mod catalog;
pub mod system;
pub mod technicians;

/// Router for all marketplace endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/bookings", bookings::router())
        .nest("/technicians", technicians::router())
        .nest("/services", catalog::router())
}
