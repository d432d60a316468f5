use {
    crate::error::AggregatorError,
    serde::Serialize,
    std::convert::Infallible,
    warp::{
        http::StatusCode,
        reply::{self, Reply},
        Rejection,
    },
};

/// Error body sent to clients as `{"message": ...}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip)]
    pub status: u16,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: status.as_u16(),
        }
    }
}

impl warp::reject::Reject for ErrorResponse {}

impl From<AggregatorError> for ErrorResponse {
    fn from(err: AggregatorError) -> Self {
        Self {
            message: err.to_string(),
            status: err.status_code(),
        }
    }
}

/// Serialize `body` as JSON, surfacing encode failures as an error instead of
/// an empty 500
pub fn json_reply<T: Serialize>(body: &T) -> Result<reply::Response, AggregatorError> {
    let json = serde_json::to_string(body)?;
    Ok(reply::with_header(json, "content-type", "application/json").into_response())
}

pub fn reject(err: AggregatorError) -> Rejection {
    warp::reject::custom(ErrorResponse::from(err))
}

/// Turn every rejection into a JSON error body with a matching status
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let response = if let Some(e) = err.find::<ErrorResponse>() {
        let status = StatusCode::from_u16(e.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        ErrorResponse::new(status, e.message.clone())
    } else if err.is_not_found() {
        ErrorResponse::new(StatusCode::NOT_FOUND, "Invalid URL")
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        ErrorResponse::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    } else {
        log::error!("Unhandled rejection: {:?}", err);
        ErrorResponse::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    };

    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        log::warn!("Request failed ({}): {}", status, response.message);
    }

    Ok(reply::with_status(reply::json(&response), status))
}
