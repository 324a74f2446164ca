use std::convert::Infallible;

use diesel::r2d2::PoolError;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};
use warp::http::StatusCode;
use warp::{Rejection, Reply};

use crate::models::ValidationError;

/// Everything a plant endpoint can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("plant {0} not found")]
    NotFound(i32),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),

    #[error("blocking task failed: {0}")]
    Blocking(#[from] tokio::task::JoinError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) | ApiError::Pool(_) | ApiError::Blocking(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl warp::reject::Reject for ApiError {}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn error_reply(status: StatusCode, message: impl Into<String>) -> warp::reply::Response {
    let body = ErrorBody {
        error: message.into(),
    };
    warp::reply::with_status(warp::reply::json(&body), status).into_response()
}

/// Turns every rejection into a JSON error body with a matching status.
pub async fn handle_rejection(err: Rejection) -> Result<warp::reply::Response, Infallible> {
    if err.is_not_found() {
        return Ok(error_reply(StatusCode::NOT_FOUND, "not found"));
    }

    if let Some(api_err) = err.find::<ApiError>() {
        let status = api_err.status();
        if status.is_server_error() {
            error!(error = %api_err, "request failed");
            return Ok(error_reply(status, "internal server error"));
        }
        warn!(error = %api_err, "request rejected");
        return Ok(error_reply(status, api_err.to_string()));
    }

    if let Some(body_err) = err.find::<warp::filters::body::BodyDeserializeError>() {
        warn!(error = %body_err, "malformed request body");
        return Ok(error_reply(
            StatusCode::BAD_REQUEST,
            format!("malformed request body: {body_err}"),
        ));
    }

    if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        return Ok(error_reply(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "expected a JSON body",
        ));
    }

    if err.find::<warp::reject::LengthRequired>().is_some() {
        return Ok(error_reply(
            StatusCode::LENGTH_REQUIRED,
            "content-length header required",
        ));
    }

    if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        return Ok(error_reply(
            StatusCode::PAYLOAD_TOO_LARGE,
            "request body too large",
        ));
    }

    if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        return Ok(error_reply(
            StatusCode::METHOD_NOT_ALLOWED,
            "method not allowed",
        ));
    }

    error!(?err, "unhandled rejection");
    Ok(error_reply(
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal server error",
    ))
}
