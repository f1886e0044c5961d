use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

pub struct ResponseError(Response);

impl IntoResponse for ResponseError {
    fn into_response(self) -> Response {
        self.0
    }
}

impl<E> From<E> for ResponseError
where
    E: Into<color_eyre::eyre::Error>,
{
    fn from(value: E) -> Self {
        let err = Into::<color_eyre::eyre::Error>::into(value);
        error!("request failed: {err:#}");
        Self(
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Server error handling the request" })),
            )
                .into_response(),
        )
    }
}

impl ResponseError {
    pub fn with_status(status_code: StatusCode, message: &str) -> Self {
        ResponseError((status_code, Json(json!({ "error": message }))).into_response())
    }

    pub fn bad_request(message: &str) -> Self {
        Self::with_status(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: &str) -> Self {
        Self::with_status(StatusCode::NOT_FOUND, message)
    }

    /// Non-success status from the amenity service, with the upstream
    /// status code attached so the client can tell it apart from a 500.
    pub fn bad_gateway(upstream_status: StatusCode) -> Self {
        ResponseError(
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({
                    "error": "Overpass API error",
                    "status": upstream_status.as_u16(),
                })),
            )
                .into_response(),
        )
    }
}

pub type Result<T, E = ResponseError> = axum::response::Result<T, E>;
