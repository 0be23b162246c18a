use axum::{
    extract::State,
    http::{HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use shared::{CreateReservationRequest, LogEntry};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{debug, error, info, warn};

use crate::domain::{ReservationError, ReservationService};

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub reservation_service: ReservationService,
}

impl AppState {
    pub fn new(reservation_service: ReservationService) -> Self {
        Self { reservation_service }
    }
}

/// Build the API router, serving the frontend from `static_dir` as fallback
pub fn create_router(app_state: AppState, allowed_origin: &str, static_dir: &Path) -> Router {
    let cors = match allowed_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new().allow_origin(origin),
        Err(_) => {
            warn!("Invalid allowed origin {:?}, allowing any origin", allowed_origin);
            CorsLayer::new().allow_origin(Any)
        }
    }
    .allow_methods([Method::GET, Method::POST])
    .allow_headers(Any);

    let api_routes = Router::new()
        .route("/reservations", get(list_reservations).post(create_reservation))
        .route("/accommodations", get(list_accommodations))
        .route("/logs", post(log_message));

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .with_state(app_state)
}

/// GET /api/reservations
pub async fn list_reservations(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/reservations");

    match state.reservation_service.list_reservations().await {
        Ok(reservations) => (StatusCode::OK, Json(reservations)).into_response(),
        Err(e) => {
            error!("Error listing reservations: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing reservations").into_response()
        }
    }
}

/// GET /api/accommodations
pub async fn list_accommodations(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/accommodations");

    match state.reservation_service.list_accommodations().await {
        Ok(accommodations) => (StatusCode::OK, Json(accommodations)).into_response(),
        Err(e) => {
            error!("Error listing accommodations: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing accommodations").into_response()
        }
    }
}

/// POST /api/reservations
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(request): Json<CreateReservationRequest>,
) -> impl IntoResponse {
    info!("POST /api/reservations - guest: {}", request.guest_name);

    match state.reservation_service.create_reservation(request).await {
        Ok(reservation) => (StatusCode::CREATED, Json(reservation)).into_response(),
        Err(e @ ReservationError::Invalid(_)) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
        Err(e @ ReservationError::UnknownAccommodation(_)) => {
            (StatusCode::NOT_FOUND, e.to_string()).into_response()
        }
        Err(e) => {
            error!("Error creating reservation: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error creating reservation").into_response()
        }
    }
}

/// POST /api/logs - forwards browser log lines into the server log
pub async fn log_message(Json(entry): Json<LogEntry>) -> impl IntoResponse {
    let component = entry.component.as_deref().unwrap_or("frontend");
    match entry.level.as_str() {
        "error" => error!(target: "frontend", "[{}] {}", component, entry.message),
        "warn" => warn!(target: "frontend", "[{}] {}", component, entry.message),
        "debug" => debug!(target: "frontend", "[{}] {}", component, entry.message),
        _ => info!(target: "frontend", "[{}] {}", component, entry.message),
    }
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbConnection;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use chrono::NaiveDate;
    use shared::{Accommodation, Reservation, ReservationStatus};
    use std::path::PathBuf;
    use tower::ServiceExt;

    async fn setup_test_state() -> AppState {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        db.put_accommodation(&Accommodation {
            id: "A1".to_string(),
            name: "Cabin".to_string(),
        })
        .await
        .expect("Failed to store accommodation");
        AppState::new(ReservationService::new(db))
    }

    fn test_router(state: AppState) -> Router {
        create_router(state, "http://localhost:8080", &PathBuf::from("does-not-exist"))
    }

    fn create_body(guest: &str, acc_id: &str) -> Body {
        let request = CreateReservationRequest {
            guest_name: guest.to_string(),
            accommodation_id: acc_id.to_string(),
            check_in: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            status: ReservationStatus::Confirmed,
        };
        Body::from(serde_json::to_vec(&request).unwrap())
    }

    fn post_reservation(body: Body) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/reservations")
            .header("content-type", "application/json")
            .body(body)
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_handlers() {
        let state = setup_test_state().await;

        let response = list_reservations(State(state.clone())).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let response = list_accommodations(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let accommodations: Vec<Accommodation> = serde_json::from_slice(&body).unwrap();
        assert_eq!(accommodations.len(), 1);
        assert_eq!(accommodations[0].name, "Cabin");
    }

    #[tokio::test]
    async fn test_create_then_list_through_router() {
        let app = test_router(setup_test_state().await);

        let response = app
            .clone()
            .oneshot(post_reservation(create_body("Ana Ruiz", "A1")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let created: Reservation = serde_json::from_slice(&body).unwrap();
        assert_eq!(created.accommodation_name, "Cabin");

        let response = app
            .oneshot(Request::builder().uri("/api/reservations").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let listed: Vec<Reservation> = serde_json::from_slice(&body).unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn test_create_invalid_reservation_is_bad_request() {
        let app = test_router(setup_test_state().await);

        let response = app.oneshot(post_reservation(create_body("  ", "A1"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(
            String::from_utf8(body.to_vec()).unwrap(),
            "El nombre del huésped es obligatorio"
        );
    }

    #[tokio::test]
    async fn test_create_for_unknown_accommodation_is_not_found() {
        let app = test_router(setup_test_state().await);

        let response = app.oneshot(post_reservation(create_body("Ana", "Z9"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_log_message() {
        let entry = LogEntry {
            level: "warn".to_string(),
            message: "Failed to fetch reservations".to_string(),
            component: Some("ReservationCalendar".to_string()),
        };
        let response = log_message(Json(entry)).await.into_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
