//! Extractors whose rejections answer with the board's `{kind, message}` error body.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::BoardError;

/// JSON body; a malformed or mistyped body is a 400 `VALIDATION` error.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(BoardError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Path segments; a segment of the wrong type is a 400 `VALIDATION` error.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(BoardError))]
pub struct Path<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(BoardError))]
pub struct Query<T>(pub T);

impl From<JsonRejection> for BoardError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for BoardError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for BoardError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}
