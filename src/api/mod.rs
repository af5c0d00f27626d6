use actix_web::HttpResponse;
use serde::Serialize;
use utoipa::ToSchema;

use crate::data::StoreError;

pub mod handlers;
pub mod openapi;
pub mod routes;

/// Error payload shared by every non-2xx response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

pub(crate) fn store_error_response(err: &StoreError) -> HttpResponse {
    let body = ErrorBody::new(err.to_string());
    match err {
        StoreError::NotFound { .. } => HttpResponse::NotFound().json(body),
        StoreError::IncompletePosition => HttpResponse::BadRequest().json(body),
    }
}
